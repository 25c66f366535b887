//! Tiered post-text extraction.
//!
//! Given the comment-box element a user is replying from, [`PostExtractor`]
//! walks the surrounding tree to find the post being replied to. Post markup
//! is vendor-controlled, so extraction degrades through successively cruder
//! heuristics instead of failing outright:
//!
//! 1. Ancestor-container match: nearest post-shaped ancestor, then the first
//!    marker-matched body-text descendant inside it.
//! 2. Line-filtered fallback: the container's own text, with short lines and
//!    UI chrome dropped.
//! 3. Broad upward scan: no post-shaped ancestor at all; accept the first
//!    nearby element whose text looks like a post body.
//!
//! A miss is a `None`, never an error - the caller falls back to manual
//! input. The extractor only reads the tree; scraper documents are immutable
//! snapshots, so results are stable across repeated calls.

use scraper::ElementRef;

use super::markers::{ExtractionLimits, Marker, MarkerSet};

/// Heuristic post-text extractor over a parsed HTML tree.
#[derive(Debug, Clone, Default)]
pub struct PostExtractor {
    markers: MarkerSet,
    limits: ExtractionLimits,
}

impl PostExtractor {
    /// Creates an extractor with injected marker data and limits.
    pub fn new(markers: MarkerSet, limits: ExtractionLimits) -> Self {
        Self { markers, limits }
    }

    /// Extracts the text of the post enclosing `comment_box`.
    ///
    /// Returns `None` when every tier comes up empty; a returned string is
    /// never empty after trimming.
    pub fn extract(&self, comment_box: ElementRef<'_>) -> Option<String> {
        match self.find_container(comment_box) {
            Some(container) => self
                .marked_text(container)
                .or_else(|| self.line_filtered_text(container)),
            // Only when no structural container matched at all.
            None => self.broad_scan(comment_box),
        }
    }

    /// Tier 1a: nearest ancestor (the comment box included) matching a
    /// container marker, markers tried in order.
    fn find_container<'a>(&self, comment_box: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.markers
            .container_markers
            .iter()
            .find_map(|marker| Self::nearest_matching_ancestor(comment_box, marker))
    }

    fn nearest_matching_ancestor<'a>(
        element: ElementRef<'a>,
        marker: &Marker,
    ) -> Option<ElementRef<'a>> {
        ancestor_chain(element).find(|candidate| marker.matches(candidate))
    }

    /// Tier 1b: first descendant matching a text marker, markers tried in
    /// order; accepted only past the minimum-length gate.
    fn marked_text(&self, container: ElementRef<'_>) -> Option<String> {
        for marker in &self.markers.text_markers {
            let matched = container
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .find(|element| marker.matches(element));

            if let Some(element) = matched {
                let text = rendered_text(element);
                if text.len() >= self.limits.min_text_len {
                    return Some(text);
                }
            }
        }
        None
    }

    /// Tier 2: the container's rendered text, line-filtered against length
    /// and UI-chrome noise, capped at the first few surviving lines.
    fn line_filtered_text(&self, container: ElementRef<'_>) -> Option<String> {
        let text = rendered_text(container);
        let kept: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| line.len() >= self.limits.min_line_len)
            .filter(|line| !self.markers.is_chrome(line))
            .take(self.limits.max_lines)
            .collect();

        if kept.is_empty() {
            None
        } else {
            Some(kept.join("\n"))
        }
    }

    /// Tier 3: bounded upward walk scanning each level's subtree in document
    /// order for the first element whose text sits in the accepted length
    /// window and does not open with UI chrome.
    fn broad_scan(&self, comment_box: ElementRef<'_>) -> Option<String> {
        for ancestor in ancestor_chain(comment_box)
            .skip(1)
            .take(self.limits.max_ancestor_levels)
        {
            for element in ancestor.descendants().filter_map(ElementRef::wrap) {
                let text = rendered_text(element);
                if text.len() < self.limits.scan_min_len || text.len() > self.limits.scan_max_len {
                    continue;
                }
                let first_line = text.lines().next().unwrap_or("").trim();
                if self.markers.is_chrome(first_line) {
                    continue;
                }
                return Some(text);
            }
        }
        None
    }
}

/// The element itself followed by its ancestors, nearest first.
fn ancestor_chain(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    std::iter::successors(Some(element), |current| {
        current.parent().and_then(ElementRef::wrap)
    })
}

/// Approximates rendered text: non-empty text nodes joined with newlines.
fn rendered_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
