//! Data models representing database entities and API bodies.

/// Token claims and credential request/response bodies
pub mod auth;
/// Per-user balance model
pub mod stats;
/// User account model
pub mod user;
