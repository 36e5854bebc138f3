//! Account Service library.
//!
//! Registration, login and balance lookup over a Postgres credential store,
//! authenticated with signed bearer tokens. `main.rs` wires these modules
//! into an HTTP server.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
