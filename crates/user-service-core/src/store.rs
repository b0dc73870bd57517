//! Read-only in-memory user store.
//!
//! The store is filled once at construction and never mutated afterwards, so
//! it can be shared behind an `Arc` by any number of concurrent readers
//! without locking.

use crate::models::User;
use std::collections::BTreeMap;
use tracing::debug;

/// Immutable collection of users keyed by id.
///
/// Iteration runs in ascending id order, which makes name matching
/// deterministic: when several users share a name the lowest id wins.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: BTreeMap<i32, User>,
}

impl UserStore {
    /// Build a store from a set of users. A later user replaces an earlier
    /// one with the same id.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id, user))
            .collect::<BTreeMap<_, _>>();
        debug!("User store initialized with {} users", users.len());
        Self { users }
    }

    /// The store the producer serves: ids 1-3, names "u1".."u3", ages 10/20/30.
    pub fn seeded() -> Self {
        Self::from_users([
            User::new(1, "u1", 10),
            User::new(2, "u2", 20),
            User::new(3, "u3", 30),
        ])
    }

    /// Look up a user by id. Unknown and negative ids yield `None`.
    pub fn get(&self, id: i32) -> Option<&User> {
        self.users.get(&id)
    }

    /// Find the first user whose name equals `name`.
    ///
    /// An empty name matches nothing.
    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        if name.is_empty() {
            return None;
        }
        self.users.values().find(|user| user.name == name)
    }

    /// Number of users held.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}
