use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An invoice of the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
}

impl Invoice {
    pub fn new() -> Self {
        Self { id: Uuid::now_v7() }
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}
