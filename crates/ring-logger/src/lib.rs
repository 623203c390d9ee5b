//! Ring Logger
//!
//! `log` backend for browser apps. Every record is mirrored to the
//! browser console (stderr off-browser) and the most recent lines are
//! kept in a fixed-size circular buffer for in-app diagnostics.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RingLogger> = OnceLock::new();

/// Fixed-capacity buffer; the oldest line is dropped when full
#[derive(Debug)]
pub struct LineRing {
    capacity: usize,
    lines: VecDeque<String>,
}

impl LineRing {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Lines oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// The logger installed behind the `log` facade
pub struct RingLogger {
    app_name: String,
    level: LevelFilter,
    ring: Mutex<LineRing>,
}

impl RingLogger {
    fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            ring: Mutex::new(LineRing::new(capacity)),
        }
    }

    fn format_line(&self, record: &Record) -> String {
        format!(
            "{} {:<5} {} {}",
            chrono::Utc::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.args()
        )
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        write_console(record.level(), &line);
        if let Ok(mut ring) = self.ring.lock() {
            ring.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger. Only the first call takes effect.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), SetLoggerError> {
    init_logger_with_level(app_name, capacity, LevelFilter::Info)
}

pub fn init_logger_with_level(
    app_name: &str,
    capacity: usize,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.ring.lock().ok().map(|ring| ring.snapshot()))
        .unwrap_or_default()
}

pub fn clear_recent() {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut ring) = logger.ring.lock() {
            ring.clear();
        }
    }
}
