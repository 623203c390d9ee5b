//! Apply Form Component
//!
//! Quick grant application (schema v1). Submit downloads the record,
//! Save Local only persists, Export All downloads the whole log.

use leptos::html;
use leptos::prelude::*;

use crate::components::{submit_form, PreviewState, SubmissionPreview};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::submission::{ApplicationV1, FormSchema, SubmissionRecord, SubmissionStore};

#[component]
pub fn ApplyForm() -> impl IntoView {
    let store = use_app_store();
    let form_ref = NodeRef::<html::Form>::new();
    let (preview, set_preview) = signal(PreviewState::Empty);

    let prefill_id = move || store.apply_prefill().get().map(|p| p.grant_id).unwrap_or_default();
    let prefill_title = move || store.apply_prefill().get().map(|p| p.grant_title).unwrap_or_default();

    // Shared by Submit and Save Local
    let persist = move |download: bool| {
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        if !form.report_validity() {
            return;
        }
        match submit_form::<ApplicationV1>(&form, download) {
            Ok(submitted) => {
                log::info!("[SUBMIT] {} saved (download: {})", submitted.record.id(), download);
                // Saved even if the download failed, so a resubmit would duplicate it
                set_preview.set(PreviewState::submitted(&submitted));
                form.reset();
                store.apply_prefill().set(None);
            }
            Err(e) => {
                log::error!("[SUBMIT] failed: {}", e);
                set_preview.set(PreviewState::Failed(e.to_string()));
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        persist(true);
    };

    let export_all = move |_| {
        let result = SubmissionStore::<ApplicationV1>::browser().and_then(|s| s.export_all());
        match result {
            Ok(Some(artifact)) => match artifact.download() {
                Ok(()) => set_preview.set(PreviewState::Info(format!("Exported {}", artifact.filename))),
                Err(e) => set_preview.set(PreviewState::Failed(e.to_string())),
            },
            Ok(None) => set_preview.set(PreviewState::Info("No saved submissions to export.".to_string())),
            Err(e) => {
                log::error!("[EXPORT] {} failed: {}", FormSchema::V1.storage_key(), e);
                set_preview.set(PreviewState::Failed(e.to_string()));
            }
        }
    };

    view! {
        <div class="form-screen">
            <h2>"Apply for a grant"</h2>
            <form class="app-form" node_ref=form_ref on:submit=on_submit>
                <fieldset>
                    <legend>"Applicant"</legend>
                    <label class="field">
                        <span class="field-label">"Name *"</span>
                        <input type="text" name="applicantName" required />
                    </label>
                    <label class="field">
                        <span class="field-label">"Email *"</span>
                        <input type="email" name="email" required />
                    </label>
                    <label class="field">
                        <span class="field-label">"Organization"</span>
                        <input type="text" name="organization" />
                    </label>
                </fieldset>

                <fieldset>
                    <legend>"Grant"</legend>
                    <label class="field">
                        <span class="field-label">"Grant ID *"</span>
                        <input type="text" name="grantId" required prop:value=prefill_id />
                    </label>
                    <label class="field">
                        <span class="field-label">"Grant title"</span>
                        <input type="text" name="grantTitle" prop:value=prefill_title />
                    </label>
                    <label class="field">
                        <span class="field-label">"Amount requested *"</span>
                        <input type="number" name="amountRequested" min="0" step="any" required />
                    </label>
                    <label class="field checkbox">
                        <input type="checkbox" name="matchRequired" value="true" />
                        <span>"Matching funds required"</span>
                    </label>
                </fieldset>

                <fieldset>
                    <legend>"Proposal"</legend>
                    <label class="field">
                        <span class="field-label">"Summary *"</span>
                        <textarea name="proposalSummary" rows="5" required></textarea>
                    </label>
                    <label class="field">
                        <span class="field-label">"Categories (comma separated)"</span>
                        <input type="text" name="categories" />
                    </label>
                </fieldset>

                <div class="form-actions">
                    <button type="submit" class="btn primary">"Submit"</button>
                    <button type="button" class="btn outline" on:click=move |_| persist(false)>
                        "Save Local"
                    </button>
                    <button type="button" class="btn outline" on:click=export_all>
                        "Export All"
                    </button>
                </div>
            </form>
            <SubmissionPreview state=preview />
        </div>
    }
}
