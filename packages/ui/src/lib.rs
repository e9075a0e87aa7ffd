//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod backend;
pub use backend::{use_backend, BackendProvider};

mod auth;
pub use auth::{use_session, BackToStartButton, SessionProvider};

pub mod activity_log;
pub use activity_log::{log_activity, log_call, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod navbar;
pub use navbar::Navbar;

mod error_modal;
pub use error_modal::ErrorModal;

mod field_input;
pub use field_input::FieldInput;

mod credential_form;
pub use credential_form::CredentialFormView;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod edit_user_form;
pub use edit_user_form::EditUserForm;

mod user_roster;
pub use user_roster::UserRoster;

mod dom_practice;
pub use dom_practice::DomPractice;
