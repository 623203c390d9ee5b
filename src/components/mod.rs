//! UI Components
//!
//! Reusable Leptos components.

mod grant_card;
mod deck_view;
mod confirm_button;
mod saved_grid;
mod filter_sheet;
mod tab_bar;
mod header;
mod log_panel;
mod dynamic_field;
mod submission_preview;
mod apply_form;
mod application_form;

pub use grant_card::GrantCard;
pub use deck_view::DeckView;
pub use confirm_button::ConfirmButton;
pub use saved_grid::{SavedGrantBox, SavedGrid};
pub use filter_sheet::FilterSheet;
pub use tab_bar::TabBar;
pub use header::Header;
pub use log_panel::LogPanel;
pub use dynamic_field::DynamicField;
pub use submission_preview::{submit_form, PreviewState, SubmissionPreview};
pub use apply_form::ApplyForm;
pub use application_form::ApplicationForm;
