//! Dynamic Field Component
//!
//! Renders one organization-defined form field.

use leptos::prelude::*;

use crate::models::{FieldDescriptor, FieldKind};

#[component]
pub fn DynamicField(field: FieldDescriptor) -> impl IntoView {
    let FieldDescriptor {
        name,
        label,
        required,
        kind,
    } = field;

    let control = match kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Number | FieldKind::Date => {
            let step = (kind == FieldKind::Number).then_some("any");
            view! { <input type=kind.html_type() id=name.clone() name=name step=step required=required /> }.into_any()
        }
        FieldKind::Textarea => {
            view! { <textarea name=name.clone() id=name rows="4" required=required></textarea> }.into_any()
        }
        FieldKind::Select { options } => view! {
            <select name=name.clone() id=name required=required>
                <option value="">"Select…"</option>
                {options.into_iter().map(|opt| { let value = opt.clone(); view! { <option value=value>{opt}</option> } }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Radio { options } => view! {
            <div class="radio-group" id=name.clone()>
                {options.into_iter().map(|opt| view! {
                    <label class="radio-option">
                        <input type="radio" name=name.clone() value=opt.clone() required=required />
                        {opt}
                    </label>
                }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <span class="field-label">{label}{required.then_some(" *")}</span>
            {control}
        </div>
    }
}
