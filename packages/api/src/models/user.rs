//! # User records and the request bodies that create or change them
//!
//! ## [`UserRecord`]
//!
//! A row of the back-end's `users` table as the client sees it: `id`,
//! `username`, `email`, `fullName` and `birthDate`. The client treats it as
//! opaque beyond display and edit pre-fill and never validates it after a
//! fetch. The users service also echoes an empty `password` field, which
//! is ignored.
//!
//! ## [`UserId`]
//!
//! The back-end uses integer primary keys, but the list endpoint has also been
//! seen keyed by string ids. [`UserId`] accepts either JSON form and keeps the
//! textual representation, which is all the client needs to build
//! `/users/:id` paths.
//!
//! ## Request bodies
//!
//! - [`NewUser`]: `POST /register`, the full registration form.
//! - [`UserUpdate`]: `PUT /users/:id`, the edit form merged with the
//!   immutable username.
//! - [`Credentials`]: `GET /validate`, sent as `Username` / `Password` headers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Back-end identifier of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// Display text of a record field: `null` reads as empty, numbers and other
/// scalars as their JSON text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A registered user as returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub birth_date: String,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub birth_date: String,
    pub full_name: String,
}

/// Body of `PUT /users/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: String,
    pub password: String,
    pub email: String,
    pub birth_date: String,
    pub full_name: String,
}

/// Login credentials, carried in custom request headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_accepts_numbers_and_strings() {
        let from_number: UserId = serde_json::from_str("5").unwrap();
        let from_text: UserId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.to_string(), "5");
    }

    #[test]
    fn test_user_record_reads_backend_shape_and_ignores_password() {
        let json = r#"{
            "id": 12,
            "username": "ana",
            "password": "",
            "email": "ana@example.com",
            "birthDate": "1990-04-01",
            "fullName": "Ana Pérez"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::from(12));
        assert_eq!(user.full_name, "Ana Pérez");
        assert_eq!(user.birth_date, "1990-04-01");
    }

    #[test]
    fn test_new_user_serializes_with_camel_case_keys() {
        let body = NewUser {
            username: "ana".into(),
            password: "abc123".into(),
            email: "ana@example.com".into(),
            birth_date: "1990-04-01".into(),
            full_name: "Ana Pérez".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["birthDate"], "1990-04-01");
        assert_eq!(value["fullName"], "Ana Pérez");
        assert!(value.get("birth_date").is_none());
    }
}
