//! SuggestionList - a fixed-arity list of reply suggestions.
//!
//! Callers index into the list directly, so the arity guarantee lives in the
//! constructor: every `SuggestionList` holds exactly [`SUGGESTION_COUNT`]
//! non-empty entries, padding from [`GENERIC_SUGGESTIONS`] when the parsed
//! candidates fall short.

use serde::Serialize;

/// Number of suggestions presented per post.
pub const SUGGESTION_COUNT: usize = 3;

/// Generic professional fallback suggestions, appended in order when
/// parsing produced fewer than [`SUGGESTION_COUNT`] usable entries.
pub const GENERIC_SUGGESTIONS: [&str; SUGGESTION_COUNT] = [
    "Great insights! Thanks for sharing this perspective.",
    "This is really valuable information. Looking forward to seeing more content like this!",
    "Interesting points! I'd love to hear more about your experience with this.",
];

/// An ordered list of exactly [`SUGGESTION_COUNT`] non-empty reply suggestions.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionList([String; SUGGESTION_COUNT]);

impl SuggestionList {
    /// Builds a list from parsed candidates, enforcing the arity invariant.
    ///
    /// Candidates are trimmed; empty ones are dropped. Surplus candidates are
    /// truncated, and missing slots are filled from [`GENERIC_SUGGESTIONS`]
    /// in their fixed order.
    pub fn from_candidates(candidates: Vec<String>) -> Self {
        let mut entries: Vec<String> = candidates
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .take(SUGGESTION_COUNT)
            .collect();

        for generic in GENERIC_SUGGESTIONS {
            if entries.len() >= SUGGESTION_COUNT {
                break;
            }
            entries.push(generic.to_string());
        }

        // Length is exactly SUGGESTION_COUNT here: capped by take(), padded
        // by the loop above.
        let entries: [String; SUGGESTION_COUNT] = entries
            .try_into()
            .expect("padded to exactly SUGGESTION_COUNT entries");

        Self(entries)
    }

    /// Returns the suggestions as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates over the suggestions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Consumes the list, returning the inner array.
    pub fn into_inner(self) -> [String; SUGGESTION_COUNT] {
        self.0
    }
}

impl std::ops::Index<usize> for SuggestionList {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
