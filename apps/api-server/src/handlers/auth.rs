//! Signup and login handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use pokedex_core::domain::User;
use pokedex_core::ports::{PasswordService, TokenService};
use pokedex_shared::dto::{LoginRequest, LoginResponse, SignupRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /signup
///
/// Responds 201 with the created record as stored - including
/// `password_hash`. That exposure matches the service this one replaces;
/// strip the field before any public deployment.
pub async fn signup(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Check if email exists
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    // Hash the password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create new user
    let user = User::new(req.email, password_hash, req.name);
    let saved = state.users.create(user).await?;

    Ok(HttpResponse::Created().json(saved))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Look up the user; an unknown email is reported as such
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    // Verify password
    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    // Issue the session token
    let token = token_service
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
