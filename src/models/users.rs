use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Record;
use crate::query::resolver::{FieldValue, Listable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

/// A dashboard user account. `full_name` and `last_login` may be unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listable for User {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.email.as_str()), self.full_name.as_deref()]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "email" => FieldValue::text(&self.email),
            "full_name" => FieldValue::opt_text(self.full_name.as_deref()),
            "avatar_url" => FieldValue::opt_text(self.avatar_url.as_deref()),
            "role" => FieldValue::text(self.role.as_str()),
            "status" => FieldValue::text(self.status.as_str()),
            "last_login" => FieldValue::opt_timestamp(self.last_login),
            "created_at" => self.created_at.into(),
            _ => return None,
        };
        Some(value)
    }

    fn filter(&self, key: &str, value: &str) -> Option<bool> {
        match key {
            "role" => Some(self.role.as_str() == value),
            "status" => Some(self.status.as_str() == value),
            _ => None,
        }
    }
}
