//! Adapters - concrete implementations of ports and the HTTP surface.

pub mod ai;
pub mod http;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
