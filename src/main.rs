//! Feedmate relay binary.
//!
//! Loads configuration, wires the OpenAI provider and the post extractor
//! into the HTTP relay, and serves it.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use feedmate::adapters::http::{routes, AppState};
use feedmate::adapters::{OpenAIConfig, OpenAIProvider};
use feedmate::application::ExtractPostHandler;
use feedmate::config::AppConfig;
use feedmate::domain::extraction::PostExtractor;
use feedmate::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    info!("feedmate relay starting");

    // Validated above: the key is present and non-empty.
    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .expect("API key present after validation");

    let provider_config = OpenAIConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout())
        .with_max_retries(config.ai.max_retries);
    let ai_provider: Arc<dyn AIProvider> = Arc::new(OpenAIProvider::new(provider_config));

    let extract_handler = Arc::new(ExtractPostHandler::new(PostExtractor::default()));
    let state = AppState::new(
        ai_provider,
        extract_handler,
        config.ai.max_tokens,
        config.ai.temperature,
    );

    let app = routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, model = %config.ai.model, "feedmate relay listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Env-filter tracing, JSON-formatted in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Permissive CORS by default (the page script runs on feed origins we do
/// not control); restricted to the configured origin list when set.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}
