use super::aggregate::{User, UserId, UserRole, DEFAULT_AVATAR};
use crate::domain::common::{next_id, RecordStatus};
use crate::shared::validation::{require, require_email, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: RecordStatus,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            status: user.status,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        Ok(())
    }

    /// Build the full collection with a new account appended
    pub fn create(&self, users: &[User]) -> Result<(Vec<User>, User), ValidationError> {
        self.validate()?;
        let user = User {
            id: next_id(users),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role,
            status: self.status,
            avatar: DEFAULT_AVATAR.to_string(),
        };
        let mut updated = users.to_vec();
        updated.push(user.clone());
        Ok((updated, user))
    }

    /// Build the full collection with one account edited in place
    pub fn apply(&self, users: &[User], id: UserId) -> Result<Vec<User>, ValidationError> {
        self.validate()?;
        if !users.iter().any(|u| u.id == id) {
            return Err(ValidationError::NotFound { id: id.to_string() });
        }
        Ok(users
            .iter()
            .map(|u| {
                if u.id == id {
                    User {
                        name: self.name.trim().to_string(),
                        email: self.email.trim().to_string(),
                        phone: self.phone.trim().to_string(),
                        role: self.role,
                        status: self.status,
                        ..u.clone()
                    }
                } else {
                    u.clone()
                }
            })
            .collect())
    }
}

/// Full collection without the given account
pub fn without_user(users: &[User], id: UserId) -> Vec<User> {
    users.iter().filter(|u| u.id != id).cloned().collect()
}
