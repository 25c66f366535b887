//! Prompts for suggestion generation.

/// System prompt steering the model toward a parseable numbered list.
///
/// The numbered format is a hint, not a guarantee - the normalizer handles
/// everything the model actually returns.
pub const SUGGESTION_SYSTEM_PROMPT: &str = "You are a professional networking assistant. \
    Generate exactly 3 distinct, professional comment suggestions. \
    Format each suggestion on a new line starting with '1.', '2.', and '3.'. \
    Keep each comment concise (1-2 sentences).";

/// Builds the user prompt carrying the extracted post text.
pub fn suggestion_user_prompt(post_content: &str) -> String {
    format!(
        "Generate 3 professional comment suggestions for this post:\n\n{}",
        post_content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_post_content() {
        let prompt = suggestion_user_prompt("Excited to announce our new product!");

        assert!(prompt.contains("Excited to announce our new product!"));
        assert!(prompt.starts_with("Generate 3 professional comment suggestions"));
    }

    #[test]
    fn system_prompt_requests_numbered_format() {
        assert!(SUGGESTION_SYSTEM_PROMPT.contains("'1.'"));
        assert!(SUGGESTION_SYSTEM_PROMPT.contains("exactly 3"));
    }
}
