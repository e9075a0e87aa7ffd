//! # Backend: the client's view of the users service
//!
//! [`Backend`] is the seam between application state and transport. The state
//! crate drives every operation through it, so the same flows run against the
//! real service ([`crate::HttpBackend`]) and against the in-memory fake used in
//! tests ([`crate::MemoryBackend`]).
//!
//! [`Endpoint`] names each route once; both implementations derive the HTTP
//! method and path from it, which keeps the fake's request log directly
//! comparable with what the real client sends.

use std::fmt;

use crate::error::ApiError;
use crate::models::{Ack, Credentials, IpInfo, LoginReply, NewUser, UserId, UserRecord, UserUpdate, Welcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A back-end route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Welcome,
    Ip,
    Register,
    Validate,
    Users,
    UpdateUser(UserId),
    DeleteUser(UserId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Welcome | Endpoint::Ip | Endpoint::Validate | Endpoint::Users => Method::Get,
            Endpoint::Register => Method::Post,
            Endpoint::UpdateUser(_) => Method::Put,
            Endpoint::DeleteUser(_) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Welcome => "/".to_string(),
            Endpoint::Ip => "/ip".to_string(),
            Endpoint::Register => "/register".to_string(),
            Endpoint::Validate => "/validate".to_string(),
            Endpoint::Users => "/users".to_string(),
            Endpoint::UpdateUser(id) | Endpoint::DeleteUser(id) => format!("/users/{id}"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Async interface to the users service.
pub trait Backend {
    /// `GET /`: greeting for the start page.
    fn welcome(&self) -> impl std::future::Future<Output = Result<Welcome, ApiError>>;

    /// `GET /ip`: the caller's address as seen by the service.
    fn client_ip(&self) -> impl std::future::Future<Output = Result<IpInfo, ApiError>>;

    /// `POST /register`.
    fn register(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<Ack, ApiError>>;

    /// `GET /validate` with the credentials in the `Username`/`Password` headers.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<LoginReply, ApiError>>;

    /// `GET /users`, flattened into display order.
    fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<UserRecord>, ApiError>>;

    /// `PUT /users/:id`.
    fn update_user(
        &self,
        id: &UserId,
        update: &UserUpdate,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `DELETE /users/:id`.
    fn delete_user(&self, id: &UserId) -> impl std::future::Future<Output = Result<(), ApiError>>;
}
