use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::Record;

/// Which release a waitlist signup is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Current,
    V1,
    V2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: String,
    pub email: String,
    pub plan: Option<Plan>,
    pub created_at: DateTime<Utc>,
}

impl Record for WaitlistEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /api/waitlist`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WaitlistInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub plan: Option<Plan>,
}

impl WaitlistInput {
    pub fn into_entry(self, id: String, now: DateTime<Utc>) -> WaitlistEntry {
        WaitlistEntry {
            id,
            email: self.email,
            plan: self.plan,
            created_at: now,
        }
    }
}
