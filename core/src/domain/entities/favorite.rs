//! Parent-to-tutor favorite relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the canonical favorites relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub owner_id: Uuid,
    pub tutor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(owner_id: Uuid, tutor_id: Uuid) -> Self {
        Self {
            owner_id,
            tutor_id,
            created_at: Utc::now(),
        }
    }
}
