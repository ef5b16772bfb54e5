// Library crate for the crowdfunding data API
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod idgen;
pub mod models;
pub mod repositories;
pub mod state;
pub mod validators;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    add_investor, create_comment, create_link, create_project, delete_link, delete_project,
    get_profile, get_project, health, list_comments, list_investors, list_links, list_projects,
    list_replies, remove_investor, update_link, update_project, upsert_profile,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Project routes
        .route("/api/v1/projects", get(list_projects))
        .route("/api/v1/projects", post(create_project))
        .route("/api/v1/projects/{id}", get(get_project))
        .route("/api/v1/projects/{id}", patch(update_project))
        .route("/api/v1/projects/{id}", delete(delete_project))
        // Investor routes (nested under projects)
        .route("/api/v1/projects/{id}/investors", get(list_investors))
        .route("/api/v1/projects/{id}/investors", post(add_investor))
        .route(
            "/api/v1/projects/{id}/investors/{wallet_address}",
            delete(remove_investor),
        )
        // Comment routes
        .route("/api/v1/projects/{id}/comments", get(list_comments))
        .route("/api/v1/projects/{id}/comments", post(create_comment))
        .route("/api/v1/comments/{id}/replies", get(list_replies))
        // External link routes (nested under projects)
        .route("/api/v1/projects/{id}/links", get(list_links))
        .route("/api/v1/projects/{id}/links", post(create_link))
        .route("/api/v1/projects/{id}/links/{link_id}", put(update_link))
        .route("/api/v1/projects/{id}/links/{link_id}", delete(delete_link))
        // User profile routes
        .route("/api/v1/profiles/{wallet_address}", get(get_profile))
        .route("/api/v1/profiles/{wallet_address}", put(upsert_profile))
        // Health check
        .route("/api/v1/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
