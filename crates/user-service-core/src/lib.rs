//! User Service Core - the user store and the interface it is served through.
//!
//! This crate holds the data and the two lookups. It has no transport of its
//! own; see the `user-service-rpc` crate for the JSON-RPC server.
//!
//! # Example
//!
//! ```rust
//! use user_service_core::{User, UserService, UserStore};
//!
//! let store = UserStore::seeded();
//!
//! let user = store.get_user_by_id(2).unwrap();
//! assert_eq!(user.name, "u2");
//!
//! let matched = store.get_user_by_user(&User::probe("u3")).unwrap();
//! assert_eq!(matched.age, 30);
//!
//! assert!(store.get_user_by_id(999).is_none());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use config::{ServerConfig, ServiceConfig};
pub use error::{Result, UserServiceError};
pub use models::{User, UserProbe};
pub use service::{MethodDescriptor, ServiceDescriptor, UserService};
pub use store::UserStore;
