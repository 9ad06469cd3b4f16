use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CaughtPokemon, Pokemon, User};
use crate::error::RepoError;

/// Generic repository trait defining standard store operations.
///
/// `create` always inserts; `update` requires the entity to exist.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List all entities.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a new entity. Uniqueness conflicts surface as `RepoError::Constraint`.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity; `RepoError::NotFound` if it does not exist.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID; `RepoError::NotFound` if it does not exist.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Pokemon catalog repository.
pub trait PokemonRepository: BaseRepository<Pokemon, Uuid> {}

/// Caught-pokemon repository.
pub trait CaughtPokemonRepository: BaseRepository<CaughtPokemon, Uuid> {}
