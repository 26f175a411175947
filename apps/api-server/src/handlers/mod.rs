//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

use actix_web::{HttpResponse, web};
use quill_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/authors")
                .route("", web::get().to(authors::list))
                .route("", web::post().to(authors::create))
                .route("/{id}", web::get().to(authors::get))
                .route("/{id}", web::put().to(authors::update))
                .route("/{id}", web::delete().to(authors::delete)),
        )
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::get))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::delete().to(posts::delete)),
        )
        .default_service(web::route().to(not_found));
}

/// Catch-all for requests that match no route.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("Not Found"))
}
