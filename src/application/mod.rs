//! Application layer - command handlers wiring domain logic to ports.

mod extract_post;
mod generate_suggestions;

pub use extract_post::{ExtractPostCommand, ExtractPostError, ExtractPostHandler};
pub use generate_suggestions::{
    GenerateSuggestionsCommand, GenerateSuggestionsError, GenerateSuggestionsHandler,
};
