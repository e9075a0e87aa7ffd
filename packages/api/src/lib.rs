//! # API crate: the client side of the users back-end
//!
//! Everything the front-ends know about the HTTP service lives here: the wire
//! models, the [`Backend`] trait that application state is written against,
//! and two implementations of it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | [`Backend`] trait, [`Endpoint`] route table and [`Method`] |
//! | [`config`] | [`ApiConfig`]: base URL, defaults to `http://localhost:8082`, overridable via `USERS_API_URL` |
//! | [`error`] | [`ApiError`] and its conversion into the user-facing [`ServerError`] |
//! | [`http`] | [`HttpBackend`]: `reqwest` client, native and WASM |
//! | [`memory`] | [`MemoryBackend`]: in-memory service with a request log, for tests |
//! | [`models`] | Users, request bodies, replies, [`ServerError`] / [`ErrorKind`] |
//!
//! ## Endpoints
//!
//! | Method | Path | Used for |
//! |--------|------|----------|
//! | GET | `/` | welcome message |
//! | GET | `/ip` | caller IP descriptor |
//! | POST | `/register` | create a user |
//! | GET | `/validate` | login, credentials in `Username` / `Password` headers |
//! | GET | `/users` | list users |
//! | PUT | `/users/:id` | update a user |
//! | DELETE | `/users/:id` | delete a user |

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;

pub use backend::{Backend, Endpoint, Method};
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::HttpBackend;
pub use memory::{Call, MemoryBackend};
pub use models::{
    Ack, Credentials, ErrorKind, IpInfo, LoginReply, NewUser, ServerError, UserId, UserRecord,
    UserUpdate, Welcome,
};
