//! In-memory repositories - used as fallback when no database is
//! configured, and as the store double in handler tests.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use pokedex_core::domain::{CaughtPokemon, Pokemon, User};
use pokedex_core::error::RepoError;
use pokedex_core::ports::{
    BaseRepository, CaughtPokemonRepository, PokemonRepository, UserRepository,
};

/// In-memory user store using a HashMap behind an async RwLock.
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        // email is unique, same as the database constraint
        if store.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        if !store.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }

        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

/// In-memory pokemon catalog store.
pub struct InMemoryPokemonRepository {
    store: RwLock<HashMap<Uuid, Pokemon>>,
}

impl InMemoryPokemonRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPokemonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Pokemon, Uuid> for InMemoryPokemonRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Pokemon>, RepoError> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn create(&self, pokemon: Pokemon) -> Result<Pokemon, RepoError> {
        let mut store = self.store.write().await;

        // name is unique, same as the database constraint
        if store.values().any(|p| p.name == pokemon.name) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        store.insert(pokemon.id, pokemon.clone());
        Ok(pokemon)
    }

    async fn update(&self, pokemon: Pokemon) -> Result<Pokemon, RepoError> {
        let mut store = self.store.write().await;

        if !store.contains_key(&pokemon.id) {
            return Err(RepoError::NotFound);
        }

        store.insert(pokemon.id, pokemon.clone());
        Ok(pokemon)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

impl PokemonRepository for InMemoryPokemonRepository {}

/// In-memory caught-pokemon store.
pub struct InMemoryCaughtPokemonRepository {
    store: RwLock<HashMap<Uuid, CaughtPokemon>>,
}

impl InMemoryCaughtPokemonRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCaughtPokemonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<CaughtPokemon, Uuid> for InMemoryCaughtPokemonRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CaughtPokemon>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<CaughtPokemon>, RepoError> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn create(&self, caught: CaughtPokemon) -> Result<CaughtPokemon, RepoError> {
        self.store.write().await.insert(caught.id, caught.clone());
        Ok(caught)
    }

    async fn update(&self, caught: CaughtPokemon) -> Result<CaughtPokemon, RepoError> {
        let mut store = self.store.write().await;

        if !store.contains_key(&caught.id) {
            return Err(RepoError::NotFound);
        }

        store.insert(caught.id, caught.clone());
        Ok(caught)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

impl CaughtPokemonRepository for InMemoryCaughtPokemonRepository {}
