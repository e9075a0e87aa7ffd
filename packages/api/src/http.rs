//! # HttpBackend: [`Backend`] over HTTP with `reqwest`
//!
//! Works unchanged on native targets and in the browser (reqwest switches to
//! `fetch` on WASM). Every request and response is traced at `debug` level,
//! which is the client's only request log besides the UI activity panel.
//!
//! Responses are read as text first so that failures can be classified by
//! [`ApiError::from_rejection`] whether or not the body is JSON.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::backend::{Backend, Endpoint, Method};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    users_from_body, Ack, Credentials, IpInfo, LoginReply, NewUser, UserId, UserRecord,
    UserUpdate, Welcome,
};

/// Real back-end client. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.config.url(&endpoint.path());
        match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        }
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, endpoint: &Endpoint, request: RequestBuilder) -> Result<String, ApiError> {
        tracing::debug!(%endpoint, "request");

        let response = request.send().await.map_err(|e| {
            tracing::debug!(%endpoint, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        tracing::debug!(%endpoint, status = status.as_u16(), "response");

        if !status.is_success() {
            return Err(ApiError::from_rejection(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send(endpoint, request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Decode a success body whose content the client never depends on. The
/// status already said the call worked, so an empty or non-JSON body is
/// read as the default reply.
fn decode_or_default<T: DeserializeOwned + Default>(endpoint: &Endpoint, body: &str) -> T {
    serde_json::from_str(body).unwrap_or_else(|e| {
        tracing::debug!(%endpoint, error = %e, "success body not understood, using default");
        T::default()
    })
}

impl Backend for HttpBackend {
    async fn welcome(&self) -> Result<Welcome, ApiError> {
        let endpoint = Endpoint::Welcome;
        self.send_json(&endpoint, self.request(&endpoint)).await
    }

    async fn client_ip(&self) -> Result<IpInfo, ApiError> {
        let endpoint = Endpoint::Ip;
        self.send_json(&endpoint, self.request(&endpoint)).await
    }

    async fn register(&self, user: &NewUser) -> Result<Ack, ApiError> {
        let endpoint = Endpoint::Register;
        let request = self.request(&endpoint).json(user);
        let body = self.send(&endpoint, request).await?;
        Ok(decode_or_default(&endpoint, &body))
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError> {
        let endpoint = Endpoint::Validate;
        let request = self
            .request(&endpoint)
            .header("Username", &credentials.username)
            .header("Password", &credentials.password);
        let body = self.send(&endpoint, request).await?;
        Ok(decode_or_default(&endpoint, &body))
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let endpoint = Endpoint::Users;
        let body = self.send(&endpoint, self.request(&endpoint)).await?;
        users_from_body(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_user(&self, id: &UserId, update: &UserUpdate) -> Result<(), ApiError> {
        let endpoint = Endpoint::UpdateUser(id.clone());
        let request = self.request(&endpoint).json(update);
        self.send(&endpoint, request).await.map(|_| ())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        let endpoint = Endpoint::DeleteUser(id.clone());
        self.send(&endpoint, self.request(&endpoint)).await.map(|_| ())
    }
}
