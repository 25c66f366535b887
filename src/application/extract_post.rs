//! ExtractPostHandler - locate a comment box in an HTML snapshot and pull
//! out the enclosing post's text.

use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::extraction::PostExtractor;

/// Comment-box shape watched for on the original feed pages.
pub const DEFAULT_COMMENT_BOX_SELECTOR: &str = r#"[role="textbox"]"#;

/// Command to extract post text from one page snapshot.
#[derive(Debug, Clone)]
pub struct ExtractPostCommand {
    /// HTML snapshot of the page (or the relevant subtree).
    pub html: String,
    /// CSS selector locating the comment box; defaults to
    /// [`DEFAULT_COMMENT_BOX_SELECTOR`].
    pub comment_box_selector: Option<String>,
}

/// Error type for extraction requests.
///
/// An extraction miss is not an error - it is `Ok(None)`, pushing the
/// fallback to manual input onto the caller.
#[derive(Debug, thiserror::Error)]
pub enum ExtractPostError {
    /// The caller-supplied comment-box selector does not parse.
    #[error("invalid comment box selector: {0}")]
    InvalidSelector(String),
}

/// Handler for post-text extraction over page snapshots.
#[derive(Debug, Clone, Default)]
pub struct ExtractPostHandler {
    extractor: PostExtractor,
}

impl ExtractPostHandler {
    pub fn new(extractor: PostExtractor) -> Self {
        Self { extractor }
    }

    /// Parses the snapshot, finds the comment box, and runs the tiered
    /// extraction. Purely synchronous; the parsed tree lives for this call.
    pub fn handle(&self, cmd: ExtractPostCommand) -> Result<Option<String>, ExtractPostError> {
        let selector_str = cmd
            .comment_box_selector
            .as_deref()
            .unwrap_or(DEFAULT_COMMENT_BOX_SELECTOR);
        let selector = Selector::parse(selector_str)
            .map_err(|e| ExtractPostError::InvalidSelector(format!("{e:?}")))?;

        let document = Html::parse_document(&cmd.html);
        let Some(comment_box) = document.select(&selector).next() else {
            debug!(selector = selector_str, "no comment box in snapshot");
            return Ok(None);
        };

        Ok(self.extractor.extract(comment_box))
    }
}
