//! HTTP handlers and route configuration.

mod auth;
mod caught_pokemon;
mod health;
mod pokemon;

#[cfg(test)]
mod tests;

use actix_web::web;

/// GET / - default landing.
async fn index() -> &'static str {
    "Hello, world!"
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health::health_check))
        // Auth routes
        .route("/signup", web::post().to(auth::signup))
        .route("/login", web::post().to(auth::login))
        // Pokemon catalog
        .service(
            web::scope("/pokemon")
                .route("", web::post().to(pokemon::create_pokemon))
                .route("", web::get().to(pokemon::list_pokemon))
                .route("/{id}", web::get().to(pokemon::get_pokemon))
                .route("/{id}", web::put().to(pokemon::update_pokemon))
                .route("/{id}", web::delete().to(pokemon::delete_pokemon)),
        )
        // Caught pokemon
        .service(
            web::scope("/caught_pokemon")
                .route("", web::post().to(caught_pokemon::catch_pokemon))
                .route("", web::get().to(caught_pokemon::list_caught_pokemon))
                .route("/{id}", web::get().to(caught_pokemon::get_caught_pokemon))
                .route(
                    "/{id}",
                    web::delete().to(caught_pokemon::delete_caught_pokemon),
                ),
        );
}
