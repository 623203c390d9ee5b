//! Submission Notifications
//!
//! Advisory success message posted to the hosting frame. Delivery is
//! fire-and-forget: failures are ignored.

use serde::Serialize;

use super::record::SubmissionRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessMessage {
    pub status: String,
    pub message: String,
    pub id: String,
    pub timestamp: String,
}

impl SuccessMessage {
    pub fn for_record<R: SubmissionRecord>(record: &R) -> Self {
        Self {
            status: "success".to_string(),
            message: R::SCHEMA.success_message().to_string(),
            id: record.id().to_string(),
            timestamp: record.submitted_at().to_string(),
        }
    }
}

/// Destination for success messages
pub trait Notifier {
    fn notify(&self, message: &SuccessMessage);
}

/// `window.parent.postMessage(message, "*")`
pub struct ParentFrameNotifier;

impl Notifier for ParentFrameNotifier {
    fn notify(&self, message: &SuccessMessage) {
        log::info!("[SUBMIT] success id={} at {}", message.id, message.timestamp);

        let Some(window) = web_sys::window() else { return };
        let Ok(Some(parent)) = window.parent() else { return };
        let Ok(payload) = serde_wasm_bindgen::to_value(message) else { return };
        let _ = parent.post_message(&payload, "*");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Collects messages instead of posting them
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: RefCell<Vec<SuccessMessage>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &SuccessMessage) {
            self.sent.borrow_mut().push(message.clone());
        }
    }
}
