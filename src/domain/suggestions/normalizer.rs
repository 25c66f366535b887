//! Completion-output normalizer.
//!
//! The completion API returns free-form text with no enforced schema:
//! numbered lists, bullet lists, bare prose, or nothing usable at all.
//! [`normalize`] accepts any of these and always yields a well-formed
//! [`SuggestionList`] - parse irregularities are resolved locally and are
//! never surfaced to callers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::list::SuggestionList;

/// Lines at or below this length (after trim) are discarded as noise by the
/// line-split fallback.
const MIN_SUGGESTION_LEN: usize = 10;

/// An enumeration marker: 1-3 digits, `.` or `)`, then mandatory whitespace.
///
/// The trailing whitespace requirement keeps decimals ("3.5 stars") from
/// being misread as markers; the caller additionally requires the marker to
/// sit at the start of input or after whitespace, rejecting tokens like "v1.".
static ENUM_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,3}[.)]\s+").expect("valid enum marker regex"));

/// A leading list prefix on a single suggestion: bullet or numeric marker.
static LIST_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-•*]\s*|\d{1,3}[.)]\s*)").expect("valid list prefix regex"));

/// Normalizes raw completion output into exactly three suggestions.
///
/// Two-tier parse with a guaranteed backfill:
///
/// 1. Numbered-format parse: runs of "N. text" / "N) text" spanning line
///    breaks. Used when at least three runs are present.
/// 2. Line-split fallback: newline-separated lines, trimmed, short lines
///    dropped, leading bullet/numeric markers stripped.
///
/// The [`SuggestionList`] constructor then truncates to three entries or
/// pads from the generic fallback suggestions, so the result always has
/// exactly three non-empty entries.
pub fn normalize(raw: &str) -> SuggestionList {
    let mut candidates = parse_numbered(raw);
    if candidates.len() < 3 {
        candidates = parse_lines(raw);
    }
    SuggestionList::from_candidates(candidates)
}

/// Extracts numbered runs: each run spans from its marker to the next
/// marker or end of input.
fn parse_numbered(raw: &str) -> Vec<String> {
    let markers: Vec<regex::Match<'_>> = ENUM_MARKER
        .find_iter(raw)
        .filter(|m| {
            raw[..m.start()]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace)
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = markers
                .get(i + 1)
                .map(|next| next.start())
                .unwrap_or(raw.len());
            strip_list_prefix(raw[m.end()..end].trim())
        })
        .filter(|run| !run.is_empty())
        .collect()
}

/// Splits into lines, dropping noise and stripping list markers.
fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_SUGGESTION_LEN)
        .map(strip_list_prefix)
        .filter(|line| !line.is_empty())
        .take(3)
        .collect()
}

/// Strips leading bullet/numeric markers, repeating so stacked markers
/// ("- - text") cannot survive into a suggestion.
fn strip_list_prefix(line: &str) -> String {
    let mut current = line.trim_start();
    while let Some(m) = LIST_PREFIX.find(current) {
        current = current[m.end()..].trim_start();
    }
    current.trim_end().to_string()
}
