//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to sign up a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: confirmation message plus the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Pokemon fields submitted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonData {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub height: i32,
    pub weight: i32,
    pub description: String,
}

/// Request to record a caught pokemon. The owning user comes from the
/// caller's token, not from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchRequest {
    #[serde(rename = "pokemonId")]
    pub pokemon_id: Uuid,
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
