//! User record type.

use serde::{Deserialize, Deserializer, Serialize};

/// A user record.
///
/// Fields default when absent on the wire so a caller can send a partial
/// probe (e.g. only `name`) to `get_user_by_user`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default)]
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub age: i32,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Build a probe that carries only a name, for matching lookups.
    pub fn probe(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The wire form of a matching lookup's argument.
///
/// Only `name` is read; `id`, `age` and any other keys are ignored whatever
/// their type, so nulls or out-of-range numbers there are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct UserProbe {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl From<UserProbe> for User {
    fn from(probe: UserProbe) -> Self {
        User::probe(probe.name)
    }
}

/// `"name": null` decodes to an empty name, which matches nothing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User::new(2, "u2", 20);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({"id": 2, "name": "u2", "age": 20}));
    }

    #[test]
    fn test_partial_probe_deserializes() {
        let probe: User = serde_json::from_value(json!({"name": "u3"})).unwrap();
        assert_eq!(probe, User::probe("u3"));
        assert_eq!(probe.id, 0);
        assert_eq!(probe.age, 0);
    }

    #[test]
    fn test_probe_without_name_is_empty() {
        let probe: User = serde_json::from_value(json!({"id": 1})).unwrap();
        assert!(probe.name.is_empty());

        let probe: User = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(probe.name.is_empty());
    }

    #[test]
    fn test_user_probe_ignores_other_fields() {
        let probe: UserProbe =
            serde_json::from_value(json!({"id": null, "name": "u2", "age": null})).unwrap();
        assert_eq!(User::from(probe), User::probe("u2"));

        let probe: UserProbe =
            serde_json::from_value(json!({"id": 5_000_000_000i64, "name": "u2", "age": "old"}))
                .unwrap();
        assert_eq!(probe.name, "u2");

        let probe: UserProbe = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(probe.name.is_empty());
    }
}
