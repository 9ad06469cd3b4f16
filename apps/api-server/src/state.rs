//! Application state - shared across all handlers.

use std::sync::Arc;

use pokedex_core::ports::{CaughtPokemonRepository, PokemonRepository, UserRepository};
use pokedex_infra::database::{
    DatabaseConfig, DatabaseConnections, PostgresCaughtPokemonRepository,
    PostgresPokemonRepository, PostgresUserRepository,
};
use pokedex_infra::{
    InMemoryCaughtPokemonRepository, InMemoryPokemonRepository, InMemoryUserRepository,
};

/// Shared application state.
///
/// Stores are injected as trait objects, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub pokemon: Arc<dyn PokemonRepository>,
    pub caught: Arc<dyn CaughtPokemonRepository>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate store implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        if let Some(config) = db_config {
            match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let conn = Arc::new(connections);
                    let state = Self {
                        users: Arc::new(PostgresUserRepository::new(conn.conn.clone())),
                        pokemon: Arc::new(PostgresPokemonRepository::new(conn.conn.clone())),
                        caught: Arc::new(PostgresCaughtPokemonRepository::new(conn.conn.clone())),
                        db: Some(conn),
                    };
                    tracing::info!("Application state initialized");
                    return state;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        Self::in_memory()
    }

    /// In-memory stores: the no-database fallback, also used by handler tests.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            pokemon: Arc::new(InMemoryPokemonRepository::new()),
            caught: Arc::new(InMemoryCaughtPokemonRepository::new()),
            db: None,
        }
    }
}
