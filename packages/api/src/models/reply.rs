//! Success bodies of the back-end endpoints. Only the fields the client reads
//! are modelled; everything is optional because the client falls back to
//! defaults rather than failing on a sparse reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::UserRecord;

/// Greeting shown when the back-end does not send one.
pub const DEFAULT_WELCOME: &str = "Bienvenido!";

/// `GET /` reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Welcome {
    #[serde(default)]
    pub message: Option<String>,
}

impl Welcome {
    pub fn text(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_WELCOME,
        }
    }
}

/// `GET /ip` reply: the caller's address plus whatever lookup data the back-end attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl IpInfo {
    pub fn address(&self) -> Option<&str> {
        self.ip.as_deref().filter(|ip| !ip.is_empty())
    }

    /// Whether there is anything to show. The Go back-end only sends `data`.
    pub fn has_content(&self) -> bool {
        self.address().is_some() || self.details().is_some()
    }

    /// Lookup data as display text: strings verbatim, anything else as compact JSON.
    pub fn details(&self) -> Option<String> {
        match self.data.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// `GET /validate` reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginReply {
    #[serde(rename = "intMessage", default)]
    pub int_message: Option<String>,
}

/// Generic `{message}` acknowledgement (`POST /register`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct UsersEnvelope {
    #[serde(default)]
    data: Value,
}

/// Flatten a `GET /users` body into display order.
///
/// `data` may be a mapping id → record (kept in the order the back-end sent
/// it), an array of records, or null/absent for an empty roster. A record
/// without a usable `id` is skipped; the rest are still listed.
pub fn users_from_body(body: &str) -> Result<Vec<UserRecord>, serde_json::Error> {
    let envelope: UsersEnvelope = serde_json::from_str(body)?;
    let items: Vec<Value> = match envelope.data {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, user)| user).collect(),
        other => vec![other],
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<UserRecord>(item) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unusable user record");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    #[test]
    fn test_welcome_falls_back_when_message_missing_or_empty() {
        assert_eq!(Welcome::default().text(), "Bienvenido!");
        let empty: Welcome = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(empty.text(), "Bienvenido!");
        let sent: Welcome = serde_json::from_str(r#"{"message":"Hola"}"#).unwrap();
        assert_eq!(sent.text(), "Hola");
    }

    #[test]
    fn test_ip_details_render_strings_and_objects() {
        let text: IpInfo = serde_json::from_str(r#"{"ip":"10.0.0.1","data":"Madrid"}"#).unwrap();
        assert_eq!(text.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(text.details().as_deref(), Some("Madrid"));

        let object: IpInfo = serde_json::from_str(r#"{"data":{"city":"Lima"}}"#).unwrap();
        assert_eq!(object.details().as_deref(), Some(r#"{"city":"Lima"}"#));

        assert_eq!(IpInfo::default().details(), None);
    }

    #[test]
    fn test_ip_reply_with_only_data_is_still_shown() {
        let body = r#"{"statusCode":200,"intMessage":"Operation Successful","data":{"ip":"8.8.8.8","city":"Mountain View"}}"#;
        let info: IpInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.address(), None);
        assert!(info.has_content());
        assert!(info.details().unwrap().contains("Mountain View"));

        let blank: IpInfo = serde_json::from_str(r#"{"ip":"","data":null}"#).unwrap();
        assert!(!blank.has_content());
    }

    #[test]
    fn test_users_mapping_keeps_backend_order() {
        let body = r#"{"data":{
            "9": {"id": 9, "username": "zoe", "email": "z@x.io", "fullName": "Zoe", "birthDate": "2000-01-01"},
            "2": {"id": 2, "username": "ana", "email": "a@x.io", "fullName": "Ana", "birthDate": "1999-01-01"}
        }}"#;
        let users = users_from_body(body).unwrap();
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["9", "2"]);
    }

    #[test]
    fn test_users_array_and_null_are_accepted() {
        let body = r#"{"statusCode":200,"data":[{"id":1,"username":"ana"}]}"#;
        let users = users_from_body(body).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, UserId::from(1));

        assert!(users_from_body(r#"{"data":null}"#).unwrap().is_empty());
        assert!(users_from_body("{}").unwrap().is_empty());
    }

    #[test]
    fn test_bad_record_does_not_hide_the_others() {
        let body = r#"{"data":[
            {"id": 1, "username": "ana", "email": "a@x.io", "fullName": "Ana", "birthDate": "1999-01-01"},
            {"id": 2, "username": "bob", "email": null, "fullName": null, "birthDate": 19990101},
            {"username": "no-id"},
            {"id": {"nested": true}, "username": "odd"}
        ]}"#;
        let users = users_from_body(body).unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["ana", "bob"]);
        assert_eq!(users[1].email, "");
        assert_eq!(users[1].full_name, "");
        assert_eq!(users[1].birth_date, "19990101");
    }

    #[test]
    fn test_body_that_is_not_json_is_an_error() {
        assert!(users_from_body("<html>").is_err());
    }
}
