//! Grant Card Component
//!
//! Two-sided card: summary on the front, description and contacts on
//! the back.

use leptos::prelude::*;

use crate::models::{display_date, short_money, title_case, Grant};

/// A single grant card; the info button flips it
#[component]
pub fn GrantCard(grant: Grant) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);

    let category = grant.primary_category().to_string();
    let category_class = format!(
        "grant-card category-{}",
        category
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>()
    );
    let funding = grant
        .funding_amount
        .as_ref()
        .filter(|f| f.is_present())
        .map(|f| format!("Up to {} Available", short_money(Some(f))));
    let due = grant
        .application_due_date
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!("Due {}", display_date(d)));
    let status = grant.status.clone().filter(|s| !s.is_empty());
    let title = title_case(&grant.title);
    let description = grant.description.clone().unwrap_or_default();
    let website = grant.website.clone().filter(|w| !w.is_empty());
    let email = grant.contact_email().map(str::to_string);

    view! {
        <div class=category_class>
            <div class=move || if flipped.get() { "card-face front hidden" } else { "card-face front" }>
                <div class="card-top-row">
                    <span class="org-badge">{grant.agency.clone()}</span>
                    {grant.logo.clone().filter(|l| !l.is_empty()).map(|logo| view! {
                        <img class="logo-badge" src=logo alt="" />
                    })}
                </div>

                <h2 class="card-title">{title}</h2>

                <div class="card-bottom">
                    {funding.map(|text| view! { <span class="funding-pill">{text}</span> })}
                    <div class="pills-row">
                        {status.map(|s| view! { <span class="pill frost">{s}</span> })}
                        {due.map(|d| view! { <span class="pill frost">{d}</span> })}
                        <span class="pill primary">{category}</span>
                    </div>
                    <button class="info-fab" on:click=move |_| set_flipped.set(true)>"i"</button>
                </div>
            </div>

            <div class=move || if flipped.get() { "card-face back" } else { "card-face back hidden" }>
                <div class="card-back-top">
                    <button class="close-btn" on:click=move |_| set_flipped.set(false)>"×"</button>
                </div>
                <h3>"About this Grant"</h3>
                <div class="card-back-body">
                    <p>{description}</p>
                    {website.map(|w| view! { <p class="info-row">"🔗 " {w}</p> })}
                    {email.map(|e| view! { <p class="info-row">"✉ " {e}</p> })}
                </div>
            </div>
        </div>
    }
}
