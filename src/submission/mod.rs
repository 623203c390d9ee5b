//! Submission Store
//!
//! Append-only log of form submissions kept as a JSON array under one
//! storage key per schema. Writes read the whole log, push, and write it
//! back, so only a single writer (one tab) is supported.

mod error;
mod export;
mod form_input;
mod id;
mod notify;
mod record;
mod storage;

use std::marker::PhantomData;

use chrono::Utc;

pub use error::{StoreError, StoreResult};
pub use export::{single_export, ExportArtifact, BULK_EXPORT_FILENAME};
pub use form_input::FormInput;
pub use notify::{Notifier, ParentFrameNotifier, SuccessMessage};
pub use record::{ApplicationV1, ApplicationV2, FormSchema, SubmissionRecord};
pub use storage::{KeyValueStore, LocalStorage};
#[cfg(test)]
pub use storage::MemoryStorage;

/// Progress of one submit action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Serialized,
    Persisted,
    Notified,
}

/// A persisted record and, when requested, how its download went.
/// A failed download never undoes the save.
#[derive(Debug)]
pub struct Submitted<R> {
    pub record: R,
    pub download: Option<StoreResult<()>>,
}

impl<R> Submitted<R> {
    pub fn download_error(&self) -> Option<&StoreError> {
        self.download.as_ref().and_then(|d| d.as_ref().err())
    }
}

pub struct SubmissionStore<R, S = LocalStorage> {
    storage: S,
    phase: SubmitPhase,
    _record: PhantomData<R>,
}

impl<R: SubmissionRecord> SubmissionStore<R, LocalStorage> {
    /// Store backed by `window.localStorage`
    pub fn browser() -> StoreResult<Self> {
        Ok(Self::new(LocalStorage::open()?))
    }
}

impl<R: SubmissionRecord, S: KeyValueStore> SubmissionStore<R, S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            phase: SubmitPhase::Idle,
            _record: PhantomData,
        }
    }

    pub fn storage_key(&self) -> &'static str {
        R::SCHEMA.storage_key()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    fn enter(&mut self, phase: SubmitPhase) {
        log::debug!("[SUBMIT] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Build a record with a fresh id and timestamp
    pub fn serialize(&self, input: &FormInput) -> R {
        let now = Utc::now();
        R::from_form(
            input,
            id::generate_id(R::SCHEMA.id_prefix(), now),
            id::timestamp(now),
        )
    }

    /// The whole log, oldest first
    pub fn read_all(&self) -> StoreResult<Vec<R>> {
        match self.storage.get_item(self.storage_key())? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Append one record; returns the new log length
    pub fn append(&self, record: &R) -> StoreResult<usize> {
        let mut all = self.read_all()?;
        all.push(record.clone());
        let raw = serde_json::to_string(&all).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.storage.set_item(self.storage_key(), &raw)?;
        log::info!("[STORE] {} now holds {} submissions", self.storage_key(), all.len());
        Ok(all.len())
    }

    /// Serialize, persist, notify. The form has already passed native
    /// validation when this is called.
    pub fn submit(&mut self, input: &FormInput, notifier: &dyn Notifier) -> StoreResult<R> {
        self.enter(SubmitPhase::Validating);
        let record = self.serialize(input);
        self.enter(SubmitPhase::Serialized);

        if let Err(e) = self.append(&record) {
            log::error!("[SUBMIT] {} not persisted: {}", record.id(), e);
            self.enter(SubmitPhase::Idle);
            return Err(e);
        }
        self.enter(SubmitPhase::Persisted);

        notifier.notify(&SuccessMessage::for_record(&record));
        self.enter(SubmitPhase::Notified);

        self.enter(SubmitPhase::Idle);
        Ok(record)
    }

    /// Submit, then hand `<id>.json` to `download`
    pub fn submit_and_download<F>(
        &mut self,
        input: &FormInput,
        notifier: &dyn Notifier,
        download: F,
    ) -> StoreResult<Submitted<R>>
    where
        F: FnOnce(&ExportArtifact) -> StoreResult<()>,
    {
        let record = self.submit(input, notifier)?;
        let outcome = single_export(&record, record.id()).and_then(|artifact| download(&artifact));
        if let Err(e) = &outcome {
            log::warn!("[SUBMIT] {} saved but not downloaded: {}", record.id(), e);
        }
        Ok(Submitted {
            record,
            download: Some(outcome),
        })
    }

    /// Bulk export of the log; None when nothing has been saved
    pub fn export_all(&self) -> StoreResult<Option<ExportArtifact>> {
        let all = self.read_all()?;
        if all.is_empty() {
            return Ok(None);
        }
        ExportArtifact::new(&all, BULK_EXPORT_FILENAME).map(Some)
    }
}
