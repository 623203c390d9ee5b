//! Application Form Component
//!
//! Full application (schema v2). Fields come from the chosen organization
//! definition; attachments and certification are common to all.

use leptos::html;
use leptos::prelude::*;

use crate::components::{submit_form, DynamicField, PreviewState, SubmissionPreview};
use crate::models::OrganizationDefinition;
use crate::submission::{ApplicationV2, SubmissionRecord};

#[component]
pub fn ApplicationForm(organizations: Vec<OrganizationDefinition>) -> impl IntoView {
    let organizations = StoredValue::new(organizations);
    let (selected, set_selected) = signal(0usize);
    let form_ref = NodeRef::<html::Form>::new();
    let (preview, set_preview) = signal(PreviewState::Empty);

    let current = move || {
        organizations.with_value(|orgs| orgs.get(selected.get()).cloned())
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let index = event_target_value(&ev).parse::<usize>().unwrap_or(0);
        log::debug!("[FORM] organization #{}", index);
        set_selected.set(index);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        match submit_form::<ApplicationV2>(&form, false) {
            Ok(submitted) => {
                log::info!("[SUBMIT] {} saved", submitted.record.id());
                set_preview.set(PreviewState::submitted(&submitted));
                form.reset();
            }
            Err(e) => {
                log::error!("[SUBMIT] failed: {}", e);
                set_preview.set(PreviewState::Failed(e.to_string()));
            }
        }
    };

    view! {
        <div class="form-screen">
            <h2>"Grant application"</h2>
            <label class="field">
                <span class="field-label">"Applying as"</span>
                <select class="org-picker" on:change=on_pick>
                    {organizations.with_value(|orgs| {
                        orgs.iter().enumerate().map(|(i, org)| view! {
                            <option value=i.to_string()>{org.name.clone()}</option>
                        }).collect_view()
                    })}
                </select>
            </label>

            <form class="app-form" node_ref=form_ref on:submit=on_submit>
                {move || match current() {
                    Some(org) => view! {
                        <fieldset>
                            <legend>{org.name}</legend>
                            {org.fields.into_iter().map(|field| view! { <DynamicField field=field /> }).collect_view()}
                        </fieldset>
                    }.into_any(),
                    None => view! { <p class="empty-state">"No organization types available."</p> }.into_any(),
                }}

                <fieldset>
                    <legend>"Attachments"</legend>
                    <label class="field">
                        <span class="field-label">"Proposal document"</span>
                        <input type="file" name="proposalFile" />
                    </label>
                    <label class="field">
                        <span class="field-label">"Budget document"</span>
                        <input type="file" name="budgetFile" />
                    </label>
                </fieldset>

                <fieldset>
                    <legend>"Certification"</legend>
                    <label class="field checkbox">
                        <input type="checkbox" name="certify" required />
                        <span>"I certify that the information provided is accurate *"</span>
                    </label>
                    <label class="field">
                        <span class="field-label">"Signature *"</span>
                        <input type="text" name="signature" required />
                    </label>
                    <label class="field">
                        <span class="field-label">"Date *"</span>
                        <input type="date" name="signatureDate" required />
                    </label>
                </fieldset>

                <div class="form-actions">
                    <button type="submit" class="btn primary">"Submit application"</button>
                </div>
            </form>
            <SubmissionPreview state=preview />
        </div>
    }
}
