use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::domain::{today, Role, RoleInput, User, UserInput};
use super::repository::RoleRepository;
use crate::errors::ServiceError;

/// In-process role store.
///
/// The whole collection sits behind one lock so every operation is atomic
/// with respect to the others. Ids are assigned as `len + 1`, which means a
/// delete followed by a create can hand out an id a surviving role already has.
#[derive(Clone)]
pub struct InMemoryRoleStore {
    inner: Arc<RwLock<Vec<Role>>>,
    clock: fn() -> String,
}

impl Default for InMemoryRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoleStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::with_roles(Vec::new())
    }

    pub fn with_roles(roles: Vec<Role>) -> Self {
        Self { inner: Arc::new(RwLock::new(roles)), clock: today }
    }

    /// Store holding the `Superadmin` seed role.
    ///
    /// # Examples
    /// ```
    /// use service::roles::{InMemoryRoleStore, RoleRepository};
    /// let store = InMemoryRoleStore::seeded();
    /// let users = tokio_test::block_on(store.list_users(1)).unwrap();
    /// assert_eq!(users.len(), 2);
    /// ```
    pub fn seeded() -> Self {
        Self::with_roles(vec![Role::seed()])
    }

    /// Replace the `dateCreated` source.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleStore {
    async fn list(&self) -> Vec<Role> {
        let roles = self.inner.read().await;
        roles.clone()
    }

    async fn get(&self, id: i64) -> Result<Role, ServiceError> {
        let roles = self.inner.read().await;
        roles.iter().find(|r| r.id == id).cloned().ok_or_else(|| {
            debug!(role_id = id, "role lookup missed");
            ServiceError::not_found("Role")
        })
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: RoleInput) -> Result<Role, ServiceError> {
        let input = input.into_valid()?;
        let mut roles = self.inner.write().await;
        let role = Role::create(roles.len() as i64 + 1, input, (self.clock)());
        roles.push(role.clone());
        info!(role_id = role.id, name = %role.name, "role_created");
        Ok(role)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: RoleInput) -> Result<Role, ServiceError> {
        let input = input.into_valid()?;
        let mut roles = self.inner.write().await;
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("Role"))?;
        role.apply(input);
        info!(role_id = id, "role_updated");
        Ok(role.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let mut roles = self.inner.write().await;
        let idx = roles
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("Role"))?;
        let removed = roles.remove(idx);
        info!(role_id = id, users = removed.users.len(), "role_deleted");
        Ok(())
    }

    async fn list_users(&self, role_id: i64) -> Result<Vec<User>, ServiceError> {
        let roles = self.inner.read().await;
        roles
            .iter()
            .find(|r| r.id == role_id)
            .map(|r| r.users.clone())
            .ok_or_else(|| ServiceError::not_found("Role"))
    }

    #[instrument(skip(self, input))]
    async fn add_user(&self, role_id: i64, input: UserInput) -> Result<User, ServiceError> {
        let mut roles = self.inner.write().await;
        let role = roles
            .iter_mut()
            .find(|r| r.id == role_id)
            .ok_or_else(|| ServiceError::not_found("Role"))?;
        let user = role.push_user(input);
        info!(role_id, user_id = user.id, "user_added");
        Ok(user)
    }
}
