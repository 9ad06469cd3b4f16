use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pokemon entity - a catalog entry, unique by name.
///
/// The JSON field for `kind` is `type`, which is reserved in Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub height: i32,
    pub weight: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pokemon {
    /// Create a new catalog entry.
    pub fn new(name: String, kind: String, height: i32, weight: i32, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            height,
            weight,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}
