use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// CaughtPokemon entity - links a catalog entry to the user who caught it.
///
/// `user_id` is always taken from the authenticated caller, never from
/// client input. Deleting a record requires the caller to own it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaughtPokemon {
    pub id: Uuid,
    pub pokemon_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl CaughtPokemon {
    /// Record a catch for the given user.
    pub fn new(pokemon_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            pokemon_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
