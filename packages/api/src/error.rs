//! Errors produced by [`crate::Backend`] operations.

use crate::models::ServerError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The back-end answered with a non-success status and a structured body.
    #[error("rejected by server: {}", .0.message)]
    Rejected(ServerError),

    /// The back-end answered with a non-success status and no usable body.
    #[error("server returned status {0}")]
    Status(u16),

    /// A success body could not be decoded.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    ///
    /// A body that parses as `{message, statusCode?}` is kept; a missing
    /// `statusCode` is filled in from the HTTP status.
    pub fn from_rejection(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ServerError>(body) {
            Ok(mut err) => {
                err.status_code.get_or_insert(status);
                Self::Rejected(err)
            }
            Err(_) => Self::Status(status),
        }
    }

    /// The error to present to the user: the back-end's own body when there
    /// is one, otherwise the synthesized connection error.
    pub fn to_server_error(&self) -> ServerError {
        match self {
            Self::Rejected(err) => err.clone(),
            _ => ServerError::connection(),
        }
    }
}
