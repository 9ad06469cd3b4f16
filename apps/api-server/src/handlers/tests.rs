//! Handler flow tests driving the full actix app over in-memory stores.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use pokedex_core::ports::{BaseRepository, PasswordService, TokenService};
use pokedex_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService, TOKEN_TTL_SECS};

use crate::state::AppState;

const TEST_SECRET: &str = "handler-test-secret";

fn token_service() -> Arc<dyn TokenService> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        ttl_secs: TOKEN_TTL_SECS,
    }))
}

fn password_service() -> Arc<dyn PasswordService> {
    Arc::new(Argon2PasswordService::new())
}

macro_rules! spawn_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::Data::new(token_service()))
                .app_data(web::Data::new(password_service()))
                .configure(super::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn signup_returns_created_user_with_hashed_password() {
    let app = spawn_app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({"email": "ash@pallet.town", "password": "pikachu123", "name": "Ash"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "ash@pallet.town");
    assert_eq!(body["name"], "Ash");
    assert!(body["id"].as_str().is_some());
    // The stored credential is a hash, not the submitted plaintext
    assert_ne!(body["password_hash"], "pikachu123");
}

#[actix_web::test]
async fn signup_with_registered_email_is_rejected() {
    let state = AppState::in_memory();
    let app = spawn_app!(state.clone());

    let payload = json!({"email": "a@x.com", "password": "p", "name": "A"});

    let first = test::TestRequest::post()
        .uri("/signup")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    let second = test::TestRequest::post()
        .uri("/signup")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Email already registered");

    // No second record was created
    assert_eq!(state.users.find_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn login_returns_verifiable_token() {
    let app = spawn_app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({"email": "misty@cerulean.gym", "password": "starmie", "name": "Misty"}))
        .to_request();
    let signup_body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let user_id = Uuid::parse_str(signup_body["id"].as_str().unwrap()).unwrap();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "misty@cerulean.gym", "password": "starmie"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Login successful");

    // The token decodes back to the user's id with a one-hour expiry
    let claims = token_service()
        .validate_token(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user_id, user_id);
    let expected_exp = chrono::Utc::now().timestamp() + TOKEN_TTL_SECS;
    assert!((claims.exp - expected_exp).abs() <= 5);
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = spawn_app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({"email": "brock@pewter.gym", "password": "onix", "name": "Brock"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "brock@pewter.gym", "password": "geodude"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Invalid credentials");
}

#[actix_web::test]
async fn login_with_unknown_email_is_not_found() {
    let app = spawn_app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "nobody@nowhere.test", "password": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "User not found");
}

#[actix_web::test]
async fn protected_route_without_token_is_unauthorized() {
    let app = spawn_app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/caught_pokemon")
        .set_json(json!({"pokemonId": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "No token provided");
}

#[actix_web::test]
async fn protected_route_with_malformed_token_is_unauthorized() {
    let app = spawn_app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/caught_pokemon")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .set_json(json!({"pokemonId": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Failed to authenticate token");
}

#[actix_web::test]
async fn expired_token_is_rejected_like_a_tampered_one() {
    let app = spawn_app!(AppState::in_memory());

    // Correct secret, but the expiry already passed
    let expired_issuer = JwtTokenService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        ttl_secs: -120,
    });
    let token = expired_issuer.generate_token(Uuid::new_v4()).unwrap();

    let req = test::TestRequest::post()
        .uri("/caught_pokemon")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"pokemonId": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Failed to authenticate token");
}

/// Registers a user and logs them in, yielding `(user_id, token)`.
macro_rules! signup_and_login {
    ($app:expr, $email:expr, $password:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({"email": $email, "password": $password, "name": $name}))
            .to_request();
        let body: Value = test::read_body_json(test::call_service($app, req).await).await;
        let user_id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": $email, "password": $password}))
            .to_request();
        let body: Value = test::read_body_json(test::call_service($app, req).await).await;

        (user_id, body["token"].as_str().unwrap().to_string())
    }};
}

#[actix_web::test]
async fn owner_can_delete_their_caught_pokemon() {
    let app = spawn_app!(AppState::in_memory());
    let (user_id, token) = signup_and_login!(&app, "red@kanto.test", "pk", "Red");

    let req = test::TestRequest::post()
        .uri("/caught_pokemon")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"pokemonId": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let caught: Value = test::read_body_json(resp).await;
    assert_eq!(caught["user_id"], user_id.to_string());
    let caught_id = caught["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/caught_pokemon/{caught_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Caught Pokemon deleted successfully");

    // And the record is gone
    let req = test::TestRequest::get()
        .uri(&format!("/caught_pokemon/{caught_id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn non_owner_delete_is_masked_as_not_found() {
    let state = AppState::in_memory();
    let app = spawn_app!(state.clone());
    let (_, owner_token) = signup_and_login!(&app, "red@kanto.test", "pk", "Red");
    let (_, rival_token) = signup_and_login!(&app, "blue@kanto.test", "ev", "Blue");

    let req = test::TestRequest::post()
        .uri("/caught_pokemon")
        .insert_header(("Authorization", format!("Bearer {owner_token}")))
        .set_json(json!({"pokemonId": Uuid::new_v4()}))
        .to_request();
    let caught: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let caught_id = Uuid::parse_str(caught["id"].as_str().unwrap()).unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/caught_pokemon/{caught_id}"))
        .insert_header(("Authorization", format!("Bearer {rival_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Same status and shape as a missing record
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Caught Pokemon not found or not authorized");

    // The record was not deleted
    assert!(state.caught.find_by_id(caught_id).await.unwrap().is_some());
}

#[actix_web::test]
async fn pokemon_create_then_get_roundtrip() {
    let app = spawn_app!(AppState::in_memory());

    let payload = json!({
        "name": "Pikachu",
        "type": "Electric",
        "height": 4,
        "weight": 60,
        "description": "When several of these gather, their electricity could build and cause lightning storms."
    });
    let req = test::TestRequest::post()
        .uri("/pokemon")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Pikachu created successfully");

    let req = test::TestRequest::get().uri("/pokemon").to_request();
    let list: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    let id = list[0]["id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/pokemon/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    for field in ["name", "type", "height", "weight", "description"] {
        assert_eq!(fetched[field], payload[field]);
    }
}

#[actix_web::test]
async fn duplicate_pokemon_name_is_a_conflict() {
    let app = spawn_app!(AppState::in_memory());

    let payload = json!({
        "name": "Eevee",
        "type": "Normal",
        "height": 3,
        "weight": 65,
        "description": "Its genetic code is irregular."
    });

    let req = test::TestRequest::post()
        .uri("/pokemon")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/pokemon")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Pokemon already exists");
}

#[actix_web::test]
async fn update_pokemon_replaces_submitted_fields() {
    let app = spawn_app!(AppState::in_memory());

    let req = test::TestRequest::post()
        .uri("/pokemon")
        .set_json(json!({
            "name": "Magikarp",
            "type": "Water",
            "height": 9,
            "weight": 100,
            "description": "Famously weak."
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/pokemon").to_request();
    let list: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = list[0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/pokemon/{id}"))
        .set_json(json!({
            "name": "Gyarados",
            "type": "Water",
            "height": 65,
            "weight": 2350,
            "description": "Once it begins to rampage, it won't stop until everything is destroyed."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Gyarados");
    assert_eq!(updated["height"], 65);

    // Updating a missing id is a 404
    let req = test::TestRequest::put()
        .uri(&format!("/pokemon/{}", Uuid::new_v4()))
        .set_json(json!({
            "name": "MissingNo",
            "type": "Glitch",
            "height": 1,
            "weight": 1,
            "description": "?"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
