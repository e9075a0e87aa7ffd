//! Wire models for the users back-end.

mod reply;
mod server_error;
mod user;

pub use reply::{users_from_body, Ack, IpInfo, LoginReply, Welcome, DEFAULT_WELCOME};
pub use server_error::{ErrorKind, ServerError, CONNECTION_ERROR_MESSAGE, CONNECTION_ERROR_STATUS};
pub use user::{Credentials, NewUser, UserId, UserRecord, UserUpdate};
