//! Service layer for the roles API.
//! - Owns the role/user domain model and its in-memory store.
//! - Independent of the web framework; the `server` crate maps errors to HTTP.

pub mod errors;
pub mod roles;
