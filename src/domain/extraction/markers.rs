//! Structural markers and limits for post-text extraction.
//!
//! Feed markup is vendor-controlled and unstable, so the extraction
//! algorithm never hard-codes knowledge of a particular page. It consumes a
//! [`MarkerSet`] - ordered predicate lists describing what a post container
//! and a post body look like, plus a blocklist of UI-chrome strings - and a
//! set of numeric [`ExtractionLimits`]. The defaults describe the feed
//! markup this crate was built against; callers targeting differently-marked
//! pages inject their own.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

/// Interaction counters rendered as "<number> <unit>", e.g. "3 comments",
/// "1,204 reactions".
static COUNTER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d[\d,.]*[KkMm]?\+?\s+\w+$").expect("valid counter regex"));

/// A structural predicate over one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Element carries the given class.
    Class(String),
    /// Element carries the given attribute, with any value.
    Attr(String),
    /// Element's `role` attribute equals the given value.
    Role(String),
}

impl Marker {
    /// Checks the predicate against a single element.
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        match self {
            Marker::Class(class) => value
                .attr("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class)),
            Marker::Attr(name) => value.attr(name).is_some(),
            Marker::Role(role) => value.attr("role") == Some(role.as_str()),
        }
    }
}

/// Ordered marker lists driving the tiered extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    /// Shapes that approximate "this ancestor is one feed post", tried in order.
    pub container_markers: Vec<Marker>,
    /// Shapes that approximate "this descendant holds the post body", tried in order.
    pub text_markers: Vec<Marker>,
    /// Exact UI-chrome labels (action buttons and similar), matched
    /// case-insensitively against whole lines.
    pub chrome_labels: Vec<String>,
}

impl MarkerSet {
    /// True when a line is UI chrome: a known label or a "<number> <unit>"
    /// interaction counter.
    pub fn is_chrome(&self, line: &str) -> bool {
        let line = line.trim();
        self.chrome_labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(line))
            || COUNTER_LINE.is_match(line)
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            container_markers: vec![
                Marker::Class("feed-shared-update-v2".to_string()),
                Marker::Class("artdeco-modal".to_string()),
                Marker::Class("occludable-update".to_string()),
                Marker::Attr("data-urn".to_string()),
                Marker::Role("article".to_string()),
            ],
            text_markers: vec![
                Marker::Class("update-components-text".to_string()),
                Marker::Class("feed-shared-update-v2__description-wrapper".to_string()),
                Marker::Class("feed-shared-text-view".to_string()),
                Marker::Class("break-words".to_string()),
            ],
            chrome_labels: [
                "Like", "Celebrate", "Comment", "Share", "Repost", "Send", "Follow", "Reply",
                "Save", "More",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

/// Numeric gates bounding the extraction heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionLimits {
    /// Minimum trimmed length for a marker-matched text element; shorter
    /// matches are UI-label false positives.
    pub min_text_len: usize,
    /// Minimum trimmed line length surviving the line-filtered fallback.
    pub min_line_len: usize,
    /// Line cap for the line-filtered fallback.
    pub max_lines: usize,
    /// Ancestor-level cap for the broad upward scan.
    pub max_ancestor_levels: usize,
    /// Inclusive text-length window accepted by the broad upward scan.
    pub scan_min_len: usize,
    /// See [`ExtractionLimits::scan_min_len`].
    pub scan_max_len: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            min_text_len: 40,
            min_line_len: 20,
            max_lines: 6,
            max_ancestor_levels: 20,
            scan_min_len: 50,
            scan_max_len: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_div(html: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("div").unwrap();
        html.select(&sel).next().unwrap()
    }

    #[test]
    fn class_marker_matches_any_of_multiple_classes() {
        let html = Html::parse_fragment(r#"<div class="a feed-shared-update-v2 b"></div>"#);
        let marker = Marker::Class("feed-shared-update-v2".to_string());

        assert!(marker.matches(&first_div(&html)));
    }

    #[test]
    fn class_marker_requires_whole_class_token() {
        let html = Html::parse_fragment(r#"<div class="feed-shared-update-v2__wrapper"></div>"#);
        let marker = Marker::Class("feed-shared-update-v2".to_string());

        assert!(!marker.matches(&first_div(&html)));
    }

    #[test]
    fn attr_marker_matches_presence() {
        let html = Html::parse_fragment(r#"<div data-urn="urn:activity:123"></div>"#);

        assert!(Marker::Attr("data-urn".to_string()).matches(&first_div(&html)));
        assert!(!Marker::Attr("data-id".to_string()).matches(&first_div(&html)));
    }

    #[test]
    fn role_marker_matches_exact_value() {
        let html = Html::parse_fragment(r#"<div role="article"></div>"#);

        assert!(Marker::Role("article".to_string()).matches(&first_div(&html)));
        assert!(!Marker::Role("textbox".to_string()).matches(&first_div(&html)));
    }

    #[test]
    fn chrome_labels_match_case_insensitively() {
        let markers = MarkerSet::default();

        assert!(markers.is_chrome("Like"));
        assert!(markers.is_chrome("like"));
        assert!(markers.is_chrome("  COMMENT  "));
        assert!(!markers.is_chrome("Liked this post a lot"));
    }

    #[test]
    fn counter_lines_are_chrome() {
        let markers = MarkerSet::default();

        assert!(markers.is_chrome("3 comments"));
        assert!(markers.is_chrome("1,204 reactions"));
        assert!(markers.is_chrome("1.2K reposts"));
        assert!(markers.is_chrome("12 shares"));
    }

    #[test]
    fn prose_lines_are_not_chrome() {
        let markers = MarkerSet::default();

        assert!(!markers.is_chrome("3 reasons this launch matters to our team"));
        assert!(!markers.is_chrome("We shipped the feature yesterday"));
    }
}
