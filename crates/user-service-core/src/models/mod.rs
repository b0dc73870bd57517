//! Data models for the user service.
//!
//! These types cross the RPC boundary, so every field serializes to a
//! stable JSON primitive.

mod user;

pub use user::*;
