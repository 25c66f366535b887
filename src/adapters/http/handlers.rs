//! HTTP handlers for the relay endpoints
//!
//! These handlers connect axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use tracing::info;

use crate::application::{
    ExtractPostCommand, ExtractPostError, ExtractPostHandler, GenerateSuggestionsCommand,
    GenerateSuggestionsError, GenerateSuggestionsHandler,
};
use crate::ports::AIProvider;

use super::dto::{
    ErrorResponse, ExtractPostRequest, ExtractPostResponse, GenerateCommentsRequest,
    SuggestionsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub extract_handler: Arc<ExtractPostHandler>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl AppState {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        extract_handler: Arc<ExtractPostHandler>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            ai_provider,
            extract_handler,
            max_tokens,
            temperature,
        }
    }

    pub fn generate_suggestions_handler(&self) -> GenerateSuggestionsHandler<dyn AIProvider> {
        GenerateSuggestionsHandler::new(self.ai_provider.clone(), self.max_tokens, self.temperature)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Health check
///
/// GET /
pub async fn health() -> &'static str {
    "Feedmate relay is up"
}

/// Generate reply suggestions for a post
///
/// POST /generate-comments
pub async fn generate_comments(
    State(state): State<AppState>,
    Json(req): Json<GenerateCommentsRequest>,
) -> Result<(StatusCode, Json<SuggestionsResponse>), (StatusCode, Json<ErrorResponse>)> {
    info!(post_len = req.post_content.len(), "suggestion request");

    if req.post_content.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("No post content provided")),
        ));
    }

    let cmd = GenerateSuggestionsCommand {
        post_content: req.post_content,
    };

    let handler = state.generate_suggestions_handler();
    let suggestions = handler.handle(cmd).await.map_err(|e| match e {
        // The upstream call is the one hard failure in the pipeline; it is
        // surfaced rather than papered over with fabricated suggestions.
        GenerateSuggestionsError::Provider(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(err.to_string())),
        ),
    })?;

    Ok((StatusCode::OK, Json(SuggestionsResponse { suggestions })))
}

/// Extract post text from a page snapshot
///
/// POST /extract-post
pub async fn extract_post(
    State(state): State<AppState>,
    Json(req): Json<ExtractPostRequest>,
) -> Result<(StatusCode, Json<ExtractPostResponse>), (StatusCode, Json<ErrorResponse>)> {
    info!(html_len = req.html.len(), "extraction request");

    let cmd = ExtractPostCommand {
        html: req.html,
        comment_box_selector: req.comment_box_selector,
    };

    let post_text = state.extract_handler.handle(cmd).map_err(|e| match e {
        ExtractPostError::InvalidSelector(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Invalid comment box selector: {}",
                msg
            ))),
        ),
    })?;

    // An extraction miss is a normal outcome, not an error.
    Ok((StatusCode::OK, Json(ExtractPostResponse { post_text })))
}
