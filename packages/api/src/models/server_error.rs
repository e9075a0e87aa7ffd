//! Structured failures reported by the back-end, and their classification.
//!
//! Every non-success response of the back-end is expected to carry
//! `{message, statusCode}`. The presentation layer never looks at the message
//! text itself: [`ServerError::kind`] turns it into an [`ErrorKind`] here, at
//! the boundary, so wording changes on the server only touch this file.

use serde::{Deserialize, Serialize};

/// Message used when no structured error body is available.
pub const CONNECTION_ERROR_MESSAGE: &str = "connection error";

/// Status code reported alongside [`CONNECTION_ERROR_MESSAGE`].
pub const CONNECTION_ERROR_STATUS: u16 = 500;

/// Error body of a failed back-end request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub message: String,
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// What went wrong, independent of the back-end's exact wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UsernameTaken,
    InvalidCredentials,
    Unknown,
}

impl ServerError {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// The error shown when the back-end could not be reached or sent no body.
    pub fn connection() -> Self {
        Self::new(CONNECTION_ERROR_MESSAGE, CONNECTION_ERROR_STATUS)
    }

    pub fn kind(&self) -> ErrorKind {
        match self.message.as_str() {
            "Username already exists" | "Username or Email already exists" => {
                ErrorKind::UsernameTaken
            }
            "Invalid credentials" => ErrorKind::InvalidCredentials,
            _ => ErrorKind::Unknown,
        }
    }
}
