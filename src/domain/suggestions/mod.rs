//! Reply suggestion domain - normalization of completion output into a
//! fixed-arity suggestion list, plus the prompts that request it.

mod list;
mod normalizer;
mod prompt;

pub use list::{SuggestionList, GENERIC_SUGGESTIONS, SUGGESTION_COUNT};
pub use normalizer::normalize;
pub use prompt::{suggestion_user_prompt, SUGGESTION_SYSTEM_PROMPT};
