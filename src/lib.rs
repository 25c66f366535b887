//! Feedmate - AI reply suggestions for social feed posts
//!
//! This crate extracts post text from feed-page HTML, relays it to a
//! language-model provider, and normalizes the completion into exactly
//! three reply suggestions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
