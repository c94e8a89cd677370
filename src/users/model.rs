//! The user record as stored and as sent over the wire.

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::users::UserError;

/// A single user record.
///
/// Field names keep the `ID` / `FirstName` / `LastName` casing on the wire.
/// Decoding matches field names case-insensitively, lets later duplicates
/// win, leaves missing or `null` fields at their defaults and ignores
/// unknown fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    /// Store-assigned identifier; 0 means unassigned.
    #[serde(rename = "ID")]
    pub id: u64,

    #[serde(rename = "FirstName")]
    pub first_name: String,

    #[serde(rename = "LastName")]
    pub last_name: String,
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(UserVisitor)
    }
}

struct UserVisitor;

impl<'de> Visitor<'de> for UserVisitor {
    type Value = User;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<User, A::Error> {
        let mut user = User::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("ID") {
                if let Some(id) = map.next_value::<Option<u64>>()? {
                    user.id = id;
                }
            } else if key.eq_ignore_ascii_case("FirstName") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    user.first_name = name;
                }
            } else if key.eq_ignore_ascii_case("LastName") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    user.last_name = name;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(user)
    }
}

impl User {
    /// Build an unassigned user (ID 0).
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Decode a request body.
    ///
    /// Any decoding failure, including an empty body, a top-level `null`,
    /// trailing content or a negative ID, collapses into [`UserError::Parse`].
    pub fn from_json(body: &[u8]) -> Result<Self, UserError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Rejected user body");
            UserError::Parse
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_casing() {
        let user = User {
            id: 1,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"ID": 1, "FirstName": "Ann", "LastName": "Lee"})
        );
    }

    #[test]
    fn test_lenient_decoding() {
        // Missing ID defaults to unassigned, unknown fields ignored
        let user = User::from_json(br#"{"FirstName":"Ann","LastName":"Lee","Age":3}"#).unwrap();
        assert_eq!(user, User::new("Ann", "Lee"));

        let user = User::from_json(br#"{"FirstName":null,"LastName":"Lee"}"#).unwrap();
        assert_eq!(user, User::new("", "Lee"));
    }

    #[test]
    fn test_field_names_match_any_case() {
        let user = User::from_json(br#"{"Id":5,"firstname":"a","LASTNAME":"b"}"#).unwrap();
        assert_eq!(
            user,
            User {
                id: 5,
                first_name: "a".into(),
                last_name: "b".into(),
            }
        );

        // Later duplicates win, whatever their casing
        let user = User::from_json(br#"{"ID":1,"id":2,"firstName":"x","FIRSTNAME":"y"}"#).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.first_name, "y");
    }

    #[test]
    fn test_malformed_bodies() {
        assert_eq!(User::from_json(b""), Err(UserError::Parse));
        assert_eq!(User::from_json(b"{not json"), Err(UserError::Parse));
        assert_eq!(User::from_json(br#"{"ID":-1}"#), Err(UserError::Parse));
        assert_eq!(User::from_json(br#"{"ID":"1"}"#), Err(UserError::Parse));
        assert_eq!(User::from_json(b"null"), Err(UserError::Parse));
        assert_eq!(User::from_json(b"[1, 2]"), Err(UserError::Parse));
        assert_eq!(User::from_json(br#"{"ID":0} {"ID":1}"#), Err(UserError::Parse));
    }
}
