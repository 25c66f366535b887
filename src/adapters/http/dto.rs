//! HTTP DTOs for the relay endpoints
//!
//! These types decouple the wire format (camelCase, as the page script sends
//! it) from domain types.

use serde::{Deserialize, Serialize};

use crate::domain::suggestions::SuggestionList;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to generate reply suggestions for a post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCommentsRequest {
    /// Extracted (or manually pasted) post text
    #[serde(default)]
    pub post_content: String,
}

/// Request to extract post text from a page snapshot
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractPostRequest {
    /// HTML snapshot of the page or the relevant subtree
    pub html: String,
    /// CSS selector locating the comment box (optional)
    #[serde(default)]
    pub comment_box_selector: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response carrying exactly three reply suggestions
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: SuggestionList,
}

/// Response for a post-text extraction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractPostResponse {
    /// Extracted text, or null on an extraction miss
    pub post_text: Option<String>,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_comments_request_deserialization() {
        let json = r#"{"postContent":"Excited to share our launch!"}"#;
        let req: GenerateCommentsRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.post_content, "Excited to share our launch!");
    }

    #[test]
    fn test_generate_comments_request_missing_field_defaults_empty() {
        let json = r#"{}"#;
        let req: GenerateCommentsRequest = serde_json::from_str(json).unwrap();

        assert!(req.post_content.is_empty());
    }

    #[test]
    fn test_extract_post_request_selector_is_optional() {
        let json = r#"{"html":"<div></div>"}"#;
        let req: ExtractPostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.comment_box_selector, None);

        let json = r#"{"html":"<div></div>","commentBoxSelector":".reply-box"}"#;
        let req: ExtractPostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.comment_box_selector.as_deref(), Some(".reply-box"));
    }

    #[test]
    fn test_suggestions_response_serialization() {
        let response = SuggestionsResponse {
            suggestions: SuggestionList::from_candidates(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
            ]),
        };
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"suggestions":["A","B","C"]}"#);
    }

    #[test]
    fn test_extract_post_response_serialization() {
        let hit = ExtractPostResponse {
            post_text: Some("Post body".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&hit).unwrap(),
            r#"{"postText":"Post body"}"#
        );

        let miss = ExtractPostResponse { post_text: None };
        assert_eq!(serde_json::to_string(&miss).unwrap(), r#"{"postText":null}"#);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse::bad_request("No post content provided");
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("BAD_REQUEST"));
        assert!(json.contains("No post content provided"));
    }
}
