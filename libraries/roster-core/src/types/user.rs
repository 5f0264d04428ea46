/// User domain type
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// User account record
///
/// Wire shape: `name` plus `isActive`, with any further fields carried in
/// `extra` and written back unchanged on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,

    /// Whether the account is active; records without the field are inactive
    #[serde(default, rename = "isActive")]
    pub is_active: bool,

    /// Fields beyond `name` and `isActive`, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create an active user with no extra fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            extra: Map::new(),
        }
    }
}

/// Returns the active records from a roster, preserving input order
///
/// The input is never mutated; the result is a new vector holding clones of
/// exactly the records with `is_active` set.
pub fn filter_active_users(users: &[User]) -> Vec<User> {
    users.iter().filter(|user| user.is_active).cloned().collect()
}

/// Decode a roster from a JSON array of user records
///
/// # Errors
/// Returns an error if the input is not a JSON array of records carrying a
/// `name` field
pub fn parse_users(json: &str) -> Result<Vec<User>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a roster as a JSON array of user records
///
/// # Errors
/// Returns an error if a record cannot be serialized
pub fn users_to_json(users: &[User]) -> Result<String> {
    Ok(serde_json::to_string(users)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, is_active: bool) -> User {
        User {
            name: name.to_string(),
            is_active,
            extra: Map::new(),
        }
    }

    #[test]
    fn keeps_active_users_in_order() {
        let users = vec![
            named("Alice", true),
            named("Bob", false),
            named("Charlie", true),
        ];

        let active = filter_active_users(&users);
        let names: Vec<&str> = active.iter().map(|u| u.name.as_str()).collect();

        assert_eq!(names, ["Alice", "Charlie"]);
        assert!(active.iter().all(|u| u.is_active));
    }

    #[test]
    fn all_inactive_yields_empty() {
        let users = vec![named("Alice", false), named("Bob", false)];

        assert!(filter_active_users(&users).is_empty());
    }

    #[test]
    fn empty_roster_yields_empty() {
        assert!(filter_active_users(&[]).is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let users = vec![named("Alice", true), named("Bob", false)];
        let before = users.clone();

        let _ = filter_active_users(&users);

        assert_eq!(users, before);
    }

    #[test]
    fn record_without_active_field_parses_as_inactive() {
        let users = parse_users(r#"[{"name": "Alice"}]"#).unwrap();

        assert!(!users[0].is_active);
        assert!(filter_active_users(&users).is_empty());
    }

    #[test]
    fn extra_fields_survive_a_round_trip() {
        let json = r#"[{"name":"Alice","isActive":true,"role":"admin"}]"#;

        let users = parse_users(json).unwrap();
        assert_eq!(users[0].extra["role"], "admin");

        let active = filter_active_users(&users);
        let encoded = users_to_json(&active).unwrap();
        assert_eq!(encoded, json);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(parse_users("not json").is_err());
    }
}
