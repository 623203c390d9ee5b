//! Submission Preview Component
//!
//! Shows the JSON of the last saved record, or the error that stopped it.

use leptos::prelude::*;
use serde::Serialize;

use crate::submission::{
    ExportArtifact, FormInput, ParentFrameNotifier, StoreResult, SubmissionRecord, SubmissionStore, Submitted,
};

/// Outcome of the last form action
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewState {
    Empty,
    Saved {
        message: String,
        json: String,
        /// Set when the record was saved but its file was not downloaded
        warning: Option<String>,
    },
    Info(String),
    Failed(String),
}

impl PreviewState {
    pub fn saved<R: Serialize>(message: &str, record: &R) -> Self {
        match serde_json::to_string_pretty(record) {
            Ok(json) => PreviewState::Saved {
                message: message.to_string(),
                json,
                warning: None,
            },
            Err(e) => PreviewState::Failed(e.to_string()),
        }
    }

    pub fn submitted<R: SubmissionRecord>(submitted: &Submitted<R>) -> Self {
        let mut state = Self::saved(R::SCHEMA.success_message(), &submitted.record);
        if let (PreviewState::Saved { warning, .. }, Some(e)) = (&mut state, submitted.download_error()) {
            *warning = Some(format!("Saved, but the file was not downloaded: {}", e));
        }
        state
    }
}

/// Read the form and run the submit sequence, downloading `<id>.json`
/// when asked. Only a failure before the record is saved is an `Err`.
pub fn submit_form<R: SubmissionRecord>(form: &web_sys::HtmlFormElement, download: bool) -> StoreResult<Submitted<R>> {
    let input = FormInput::from_form(form)?;
    let mut store = SubmissionStore::<R>::browser()?;
    if download {
        store.submit_and_download(&input, &ParentFrameNotifier, ExportArtifact::download)
    } else {
        let record = store.submit(&input, &ParentFrameNotifier)?;
        Ok(Submitted { record, download: None })
    }
}

#[component]
pub fn SubmissionPreview(state: ReadSignal<PreviewState>) -> impl IntoView {
    move || match state.get() {
        PreviewState::Empty => ().into_any(),
        PreviewState::Saved { message, json, warning } => view! {
            <div class="preview">
                <p class="preview-status ok">{message}</p>
                {warning.map(|w| view! { <p class="preview-status warn">{w}</p> })}
                <pre class="preview-json">{json}</pre>
            </div>
        }
        .into_any(),
        PreviewState::Info(message) => view! { <p class="preview-status">{message}</p> }.into_any(),
        PreviewState::Failed(message) => view! {
            <p class="preview-status error">{format!("Not saved: {}", message)}</p>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{ApplicationV1, FormSchema, StoreError};

    #[test]
    fn test_saved_pretty_prints() {
        #[derive(Serialize)]
        struct Rec {
            id: &'static str,
        }
        let state = PreviewState::saved("ok", &Rec { id: "SUB-1" });
        assert_eq!(
            state,
            PreviewState::Saved {
                message: "ok".to_string(),
                json: "{\n  \"id\": \"SUB-1\"\n}".to_string(),
                warning: None,
            }
        );
    }

    #[test]
    fn test_failed_download_still_shows_saved_record() {
        let input = FormInput::from_pairs([("applicantName", "A")]);
        let record = ApplicationV1::from_form(&input, "SUB-1".into(), "t".into());
        let submitted = Submitted {
            record,
            download: Some(Err(StoreError::Unavailable("no body".to_string()))),
        };

        match PreviewState::submitted(&submitted) {
            PreviewState::Saved { message, json, warning } => {
                assert_eq!(message, FormSchema::V1.success_message());
                assert!(json.contains("\"SUB-1\""));
                assert!(warning.unwrap().contains("no body"));
            }
            other => panic!("expected saved preview, got {:?}", other),
        }
    }
}
