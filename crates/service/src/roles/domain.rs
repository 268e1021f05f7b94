use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const DEFAULT_STATUS: &str = "Active";
pub const DEFAULT_AVATAR: &str = "/api/placeholder/200/200";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and type are required fields";

/// Format of `dateCreated`, e.g. `Jan 01, 2023`.
pub const DATE_CREATED_FORMAT: &str = "%b %d, %Y";

/// Role record as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: String,
    pub date_created: String,
    pub status: String,
    #[serde(default)]
    pub users: Vec<User>,
}

/// User nested under exactly one role; `id` is unique within that role only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub avatar: String,
    pub fallback: String,
}

/// Create/update input for a role. Every field is optional on the wire so
/// that missing `name`/`type` surface as a validation error, not a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoleInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub role_type: Option<String>,
    pub status: Option<String>,
    pub users: Option<Vec<User>>,
}

/// Input for adding a user to a role. Nothing is validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserInput {
    pub avatar: Option<String>,
    pub fallback: Option<String>,
}

/// A `RoleInput` that passed validation, with empty optionals folded to `None`.
#[derive(Debug, Clone)]
pub(crate) struct ValidRoleInput {
    pub name: String,
    pub role_type: String,
    pub status: Option<String>,
    pub users: Option<Vec<User>>,
}

/// Absent and empty are treated the same.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl RoleInput {
    /// `name` and `type` must both be non-empty; a single combined error otherwise.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if is_present(&self.name) && is_present(&self.role_type) {
            Ok(())
        } else {
            Err(ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into()))
        }
    }

    pub(crate) fn into_valid(self) -> Result<ValidRoleInput, ServiceError> {
        self.validate()?;
        Ok(ValidRoleInput {
            name: self.name.unwrap_or_default(),
            role_type: self.role_type.unwrap_or_default(),
            status: present(self.status),
            users: self.users,
        })
    }
}

impl Role {
    pub(crate) fn create(id: i64, input: ValidRoleInput, date_created: String) -> Self {
        Self {
            id,
            name: input.name,
            role_type: input.role_type,
            date_created,
            status: input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            users: input.users.unwrap_or_default(),
        }
    }

    /// Overwrite name/type; status and users only when supplied.
    pub(crate) fn apply(&mut self, input: ValidRoleInput) {
        self.name = input.name;
        self.role_type = input.role_type;
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(users) = input.users {
            self.users = users;
        }
    }

    /// Append a user with id `users.len() + 1`.
    pub(crate) fn push_user(&mut self, input: UserInput) -> User {
        let id = self.users.len() as i64 + 1;
        let user = User {
            id,
            avatar: present(input.avatar).unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            fallback: present(input.fallback).unwrap_or_else(|| format!("U{}", id)),
        };
        self.users.push(user.clone());
        user
    }

    /// The record every fresh process starts with.
    pub fn seed() -> Self {
        let users = (1..=2)
            .map(|id| User {
                id,
                avatar: DEFAULT_AVATAR.to_string(),
                fallback: format!("U{}", id),
            })
            .collect();
        Self {
            id: 1,
            name: "Superadmin".into(),
            role_type: "DEFAULT".into(),
            date_created: "Jan 01, 2023".into(),
            status: DEFAULT_STATUS.into(),
            users,
        }
    }
}

pub fn today() -> String {
    Local::now().format(DATE_CREATED_FORMAT).to_string()
}
