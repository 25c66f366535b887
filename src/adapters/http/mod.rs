//! HTTP adapter - axum routes, handlers, and DTOs for the relay.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::routes;
