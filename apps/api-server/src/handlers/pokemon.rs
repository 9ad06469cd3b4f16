//! Pokemon catalog CRUD handlers. All routes are public.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use pokedex_core::domain::Pokemon;
use pokedex_core::error::RepoError;
use pokedex_shared::dto::{MessageResponse, PokemonData};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /pokemon
pub async fn create_pokemon(
    state: web::Data<AppState>,
    body: web::Json<PokemonData>,
) -> AppResult<HttpResponse> {
    let data = body.into_inner();

    let pokemon = Pokemon::new(
        data.name,
        data.kind,
        data.height,
        data.weight,
        data.description,
    );
    let saved = state.pokemon.create(pokemon).await.map_err(|e| match e {
        RepoError::Constraint(_) => AppError::Conflict("Pokemon already exists".to_string()),
        other => other.into(),
    })?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("{} created successfully", saved.name),
    }))
}

/// GET /pokemon
pub async fn list_pokemon(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let all_pokemon = state.pokemon.find_all().await?;

    Ok(HttpResponse::Ok().json(all_pokemon))
}

/// GET /pokemon/{id}
pub async fn get_pokemon(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let pokemon = state
        .pokemon
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pokemon not found".to_string()))?;

    Ok(HttpResponse::Ok().json(pokemon))
}

/// PUT /pokemon/{id}
pub async fn update_pokemon(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PokemonData>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let data = body.into_inner();

    let existing = state
        .pokemon
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pokemon not found".to_string()))?;

    let updated = Pokemon {
        name: data.name,
        kind: data.kind,
        height: data.height,
        weight: data.weight,
        description: data.description,
        updated_at: chrono::Utc::now(),
        ..existing
    };
    let saved = state.pokemon.update(updated).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /pokemon/{id}
pub async fn delete_pokemon(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.pokemon.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => AppError::NotFound("Pokemon not found".to_string()),
        other => other.into(),
    })?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Pokemon deleted successfully".to_string(),
    }))
}
