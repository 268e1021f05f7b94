//! Roles module: domain types, id parsing, repository trait and in-memory store.

pub mod domain;
pub mod id;
pub mod memory;
pub mod repository;

pub use domain::{Role, RoleInput, User, UserInput};
pub use id::parse_id;
pub use memory::InMemoryRoleStore;
pub use repository::RoleRepository;
