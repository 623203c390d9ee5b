//! Submission Identifiers
//!
//! `<PREFIX>-<base36 millis>-<6 random base36 chars>`. Best-effort unique,
//! collisions are not checked.

use chrono::{DateTime, SecondsFormat, Utc};

const SUFFIX_LEN: u32 = 6;

/// Lowercase base-36 rendering
pub fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Six base-36 chars from a value in `[0, 1)`
pub fn random_suffix(entropy: f64) -> String {
    let space = 36u64.pow(SUFFIX_LEN);
    let n = ((entropy.clamp(0.0, 1.0) * space as f64) as u64).min(space - 1);
    format!("{:0>width$}", to_base36(n), width = SUFFIX_LEN as usize)
}

pub fn format_id(prefix: &str, millis: u64, entropy: f64) -> String {
    format!("{}-{}-{}", prefix, to_base36(millis), random_suffix(entropy))
}

/// Fresh id for a submission made at `at`
pub fn generate_id(prefix: &str, at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().max(0) as u64;
    format_id(prefix, millis, entropy())
}

/// ISO 8601 with milliseconds and `Z`
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(target_arch = "wasm32")]
fn entropy() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy() -> f64 {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    // Each RandomState is seeded differently
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u64(Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64);
    (hasher.finish() >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_suffix_is_six_chars() {
        assert_eq!(random_suffix(0.0), "000000");
        assert_eq!(random_suffix(0.999_999_999_9).len(), 6);
        assert_eq!(random_suffix(1.0), "zzzzzz");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id("SUB", 36, 0.0), "SUB-10-000000");
    }

    #[test]
    fn test_generated_ids_are_fresh_and_prefixed() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let a = generate_id("APP", at);
        let b = generate_id("APP", at);
        assert!(a.starts_with("APP-"));
        assert!(b.starts_with("APP-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(timestamp(at), "2026-01-02T03:04:05.000Z");
    }
}
