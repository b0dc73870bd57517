//! The `UserService` interface and its registration metadata.
//!
//! Transport layers depend on the trait, not on `UserStore`, so any
//! implementation can be exposed the same way.

use crate::config::ServiceConfig;
use crate::models::User;
use crate::store::UserStore;
use serde::{Deserialize, Serialize};

/// The two lookups a user service answers.
///
/// Absence is an ordinary result (`None`), never an error.
pub trait UserService: Send + Sync + 'static {
    /// Return the user with this id, if any.
    fn get_user_by_id(&self, id: i32) -> Option<User>;

    /// Return the first user whose name equals `probe.name`, if any.
    ///
    /// Only the probe's `name` is consulted.
    fn get_user_by_user(&self, probe: &User) -> Option<User>;
}

impl UserService for UserStore {
    fn get_user_by_id(&self, id: i32) -> Option<User> {
        self.get(id).cloned()
    }

    fn get_user_by_user(&self, probe: &User) -> Option<User> {
        self.find_by_name(&probe.name).cloned()
    }
}

/// One method exposed by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Canonical RPC method name.
    pub name: String,
    /// Alternate name accepted by the dispatcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub params: Vec<String>,
}

impl MethodDescriptor {
    fn new(name: &str, alias: &str, params: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            alias: Some(alias.to_string()),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Name, version and method list under which a service is exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub version: String,
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// Descriptor for the `UserService` interface.
    pub fn user_service() -> Self {
        Self {
            name: ServiceConfig::SERVICE_NAME.to_string(),
            version: ServiceConfig::SERVICE_VERSION.to_string(),
            methods: vec![
                MethodDescriptor::new("get_user_by_id", "getUserById", &["id"]),
                MethodDescriptor::new("get_user_by_user", "getUserByUser", &["user"]),
            ],
        }
    }

    /// Resolve a method name or alias to its canonical name.
    pub fn resolve(&self, method: &str) -> Option<&str> {
        self.methods
            .iter()
            .find(|m| m.name == method || m.alias.as_deref() == Some(method))
            .map(|m| m.name.as_str())
    }
}
