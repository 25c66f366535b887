//! Post-text extraction domain - tiered heuristics that locate the feed post
//! enclosing a comment box and pull out its body text.

mod extractor;
mod markers;

pub use extractor::PostExtractor;
pub use markers::{ExtractionLimits, Marker, MarkerSet};
