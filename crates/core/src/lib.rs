//! Core for the movieplanner project.
//!
//! Holds the domain types, the repository and cache ports, and the pure
//! functions the server crates build on. Nothing in here performs I/O.

pub mod auth;
pub mod cache;
pub mod clock;
pub mod movie;
pub mod serde;
pub mod storage;
pub mod user;
