//! Route definitions for the relay endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{extract_post, generate_comments, health, AppState};

/// Create the relay router with all endpoints
///
/// # Endpoints
///
/// - `GET /` - Health check
/// - `POST /generate-comments` - Generate three reply suggestions for a post
/// - `POST /extract-post` - Extract post text from a page snapshot
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/generate-comments", post(generate_comments))
        .route("/extract-post", post(extract_post))
}
