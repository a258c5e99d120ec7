use crate::domain::common::{AggregateId, Identified, RecordStatus};
use serde::{Deserialize, Serialize};

/// Avatar assigned to accounts created through the directory form
pub const DEFAULT_AVATAR: &str = "https://images.unsplash.com/photo-1541746972996-4e0b0f43e02a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl AggregateId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(UserId)
    }

    fn first() -> Self {
        Self(i64::first())
    }

    fn successor(&self) -> Self {
        Self(self.0.successor())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::User => "user",
        }
    }

    pub fn all() -> [UserRole; 3] {
        [UserRole::Admin, UserRole::Manager, UserRole::User]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: RecordStatus,
    pub avatar: String,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Case-insensitive match on name or email, as used by the directory search box
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }
}

impl Identified for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stored_record() {
        let json = r#"{"id":2,"name":"Sarah Johnson","email":"sarah@example.com",
            "phone":"+1 234 567 8901","role":"manager","status":"active","avatar":""}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId(2));
        assert_eq!(user.role, UserRole::Manager);
        assert!(user.is_active());
        assert!(user.matches_query("EXAMPLE.com"));
        assert!(!user.matches_query("michael"));
    }
}
