use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::{Backend, Endpoint, Method};
use crate::error::ApiError;
use crate::models::{
    Ack, Credentials, IpInfo, LoginReply, NewUser, ServerError, UserId, UserRecord, UserUpdate,
    Welcome,
};

/// A request as seen by [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: Method,
    pub path: String,
}

impl Call {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredUser {
    record: UserRecord,
    password: String,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<StoredUser>,
    next_id: u64,
    calls: Vec<Call>,
    offline: bool,
    failures: VecDeque<(Endpoint, ApiError)>,
    welcome: Option<String>,
    ip: Option<String>,
}

/// In-memory users service for tests and demos.
///
/// Answers with the users service's texts and statuses: a taken username or
/// email on register is "Username or Email already exists", an update with
/// any empty field (password included) is "Invalid input data", unknown ids
/// are 404. Records every call and can be told to fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a user directly, bypassing `/register`. Returns its id.
    pub fn insert_user(&self, user: NewUser) -> UserId {
        let mut inner = self.inner();
        inner.next_id += 1;
        let id = UserId::from(inner.next_id);
        inner.users.push(StoredUser {
            record: UserRecord {
                id: id.clone(),
                username: user.username,
                email: user.email,
                full_name: user.full_name,
                birth_date: user.birth_date,
            },
            password: user.password,
        });
        id
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.inner().users.iter().map(|u| u.record.clone()).collect()
    }

    pub fn set_welcome(&self, message: impl Into<String>) {
        self.inner().welcome = Some(message.into());
    }

    pub fn set_ip(&self, ip: impl Into<String>) {
        self.inner().ip = Some(ip.into());
    }

    /// While offline every call fails with [`ApiError::Network`].
    pub fn set_offline(&self, offline: bool) {
        self.inner().offline = offline;
    }

    /// Make the next call to `endpoint` fail with `error`.
    pub fn fail_on(&self, endpoint: Endpoint, error: ApiError) {
        self.inner().failures.push_back((endpoint, error));
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.inner().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner().calls.clear();
    }

    /// Record the call and apply offline mode / injected failures.
    fn enter(&self, endpoint: &Endpoint) -> Result<MutexGuard<'_, Inner>, ApiError> {
        let mut inner = self.inner();
        inner
            .calls
            .push(Call::new(endpoint.method(), endpoint.path()));
        if inner.offline {
            return Err(ApiError::Network("backend offline".to_string()));
        }
        if let Some(pos) = inner.failures.iter().position(|(e, _)| e == endpoint) {
            if let Some((_, err)) = inner.failures.remove(pos) {
                return Err(err);
            }
        }
        Ok(inner)
    }
}

fn reject(message: &str, status: u16) -> ApiError {
    ApiError::Rejected(ServerError::new(message, status))
}

impl Backend for MemoryBackend {
    async fn welcome(&self) -> Result<Welcome, ApiError> {
        let inner = self.enter(&Endpoint::Welcome)?;
        Ok(Welcome {
            message: inner.welcome.clone(),
        })
    }

    async fn client_ip(&self) -> Result<IpInfo, ApiError> {
        let inner = self.enter(&Endpoint::Ip)?;
        Ok(IpInfo {
            ip: inner.ip.clone(),
            data: None,
        })
    }

    async fn register(&self, user: &NewUser) -> Result<Ack, ApiError> {
        let inner = self.enter(&Endpoint::Register)?;
        if [&user.username, &user.password, &user.email, &user.birth_date, &user.full_name]
            .iter()
            .any(|v| v.is_empty())
        {
            return Err(reject("Invalid input data", 400));
        }
        if inner
            .users
            .iter()
            .any(|u| u.record.username == user.username || u.record.email == user.email)
        {
            return Err(reject("Username or Email already exists", 409));
        }
        drop(inner);
        self.insert_user(user.clone());
        Ok(Ack {
            message: Some("User registered successfully".to_string()),
        })
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError> {
        let inner = self.enter(&Endpoint::Validate)?;
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(reject("Username and Password headers are required", 400));
        }
        let matches = inner.users.iter().any(|u| {
            u.record.username == credentials.username && u.password == credentials.password
        });
        if !matches {
            return Err(reject("Invalid credentials", 401));
        }
        Ok(LoginReply {
            int_message: Some("Operation Successful".to_string()),
        })
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let inner = self.enter(&Endpoint::Users)?;
        Ok(inner.users.iter().map(|u| u.record.clone()).collect())
    }

    async fn update_user(&self, id: &UserId, update: &UserUpdate) -> Result<(), ApiError> {
        let mut inner = self.enter(&Endpoint::UpdateUser(id.clone()))?;
        // Every field is required, the password included.
        if [&update.username, &update.password, &update.email, &update.birth_date, &update.full_name]
            .iter()
            .any(|v| v.is_empty())
        {
            return Err(reject("Invalid input data", 400));
        }
        if !inner.users.iter().any(|u| &u.record.id == id) {
            return Err(reject("User not found", 404));
        }
        if inner
            .users
            .iter()
            .any(|u| &u.record.id != id && u.record.email == update.email)
        {
            return Err(reject("Email already exists", 409));
        }
        let Some(user) = inner.users.iter_mut().find(|u| &u.record.id == id) else {
            return Err(reject("User not found", 404));
        };
        user.record.email = update.email.clone();
        user.record.birth_date = update.birth_date.clone();
        user.record.full_name = update.full_name.clone();
        user.password = update.password.clone();
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        let mut inner = self.enter(&Endpoint::DeleteUser(id.clone()))?;
        inner.users.retain(|u| &u.record.id != id);
        Ok(())
    }
}
