use async_trait::async_trait;

use super::domain::{Role, RoleInput, User, UserInput};
use crate::errors::ServiceError;

/// Repository abstraction for roles and their nested users.
///
/// Ids are already parsed; `InvalidId` is the caller's concern (see `parse_id`).
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn list(&self) -> Vec<Role>;
    async fn get(&self, id: i64) -> Result<Role, ServiceError>;
    async fn create(&self, input: RoleInput) -> Result<Role, ServiceError>;
    async fn update(&self, id: i64, input: RoleInput) -> Result<Role, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;

    async fn list_users(&self, role_id: i64) -> Result<Vec<User>, ServiceError>;
    async fn add_user(&self, role_id: i64, input: UserInput) -> Result<User, ServiceError>;
}
