//! Caught-pokemon handlers. Catching and releasing require authentication.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use pokedex_core::domain::CaughtPokemon;
use pokedex_shared::dto::{CatchRequest, MessageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /caught_pokemon
///
/// The owning user id comes from the verified token, never from the body.
pub async fn catch_pokemon(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CatchRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let caught = CaughtPokemon::new(req.pokemon_id, identity.user_id);
    let saved = state.caught.create(caught).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// GET /caught_pokemon
pub async fn list_caught_pokemon(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let all_caught = state.caught.find_all().await?;

    Ok(HttpResponse::Ok().json(all_caught))
}

/// GET /caught_pokemon/{id}
pub async fn get_caught_pokemon(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let caught = state
        .caught
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Caught Pokemon not found".to_string()))?;

    Ok(HttpResponse::Ok().json(caught))
}

/// DELETE /caught_pokemon/{id}
///
/// A missing record and someone else's record produce the same 404, so a
/// non-owner cannot confirm that a record exists.
pub async fn delete_caught_pokemon(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let owned = state
        .caught
        .find_by_id(id)
        .await?
        .map(|record| record.user_id == identity.user_id)
        .unwrap_or(false);

    if !owned {
        return Err(AppError::NotFound(
            "Caught Pokemon not found or not authorized".to_string(),
        ));
    }

    state.caught.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Caught Pokemon deleted successfully".to_string(),
    }))
}
