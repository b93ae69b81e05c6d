use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user of the system. `id` and `email` are never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a user with a fresh time-ordered id, so ordering by id
    /// approximates insertion order.
    pub fn new(email: String, first_name: String, last_name: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            first_name,
            last_name,
            created_at: Utc::now(),
        }
    }
}
