//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use pokedex_core::domain::User;
use pokedex_core::error::RepoError;
use pokedex_core::ports::{CaughtPokemonRepository, PokemonRepository, UserRepository};

use super::entity::caught_pokemon::Entity as CaughtPokemonEntity;
use super::entity::pokemon::Entity as PokemonEntity;
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL pokemon repository.
pub type PostgresPokemonRepository = PostgresBaseRepository<PokemonEntity>;

/// PostgreSQL caught-pokemon repository.
pub type PostgresCaughtPokemonRepository = PostgresBaseRepository<CaughtPokemonEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

impl PokemonRepository for PostgresPokemonRepository {}

impl CaughtPokemonRepository for PostgresCaughtPokemonRepository {}
