//! Who is using the client, and which screen that implies.
//!
//! Transitions:
//!
//! ```text
//! Anonymous --(login succeeded)--> Authenticated { username }
//! Authenticated --(logout)--> Anonymous
//! ```
//!
//! Deleting or updating users never changes the session.

use crate::form::SubmitOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { username: String },
}

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Credentials,
    Roster,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { username } => Some(username),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Session::Anonymous => View::Credentials,
            Session::Authenticated { .. } => View::Roster,
        }
    }

    /// Follow a form submission. Only a successful login moves the session.
    pub fn on_submit(&mut self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::LoggedIn { username, .. } = outcome {
            tracing::info!(%username, "session started");
            *self = Session::Authenticated {
                username: username.clone(),
            };
        }
    }

    pub fn logout(&mut self) {
        if let Session::Authenticated { username } = self {
            tracing::info!(%username, "session ended");
        }
        *self = Session::Anonymous;
    }
}
