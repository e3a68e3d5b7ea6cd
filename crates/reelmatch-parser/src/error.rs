//! Error types for filename parsing and media merging.

use crate::MediaItem;

/// A filename (or tag string) did not match a required structural pattern.
///
/// Callers discovering files on disk usually treat this as "skip this file".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A tag string did not name a known value of the given vocabulary.
    #[error("invalid {kind}: {value}")]
    InvalidTag {
        /// Vocabulary name (e.g. "quality").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// No season/episode marker was found.
    #[error("could not parse episode from {0:?}")]
    NoEpisodeMarker(String),

    /// No plausible release year was found.
    #[error("could not parse movie from {0:?}")]
    NoYear(String),

    /// The subtitle name has no dot-separated parts to split.
    #[error("could not parse subtitle from {0:?}")]
    NoSubtitleSplit(String),

    /// Neither an episode nor a movie could be identified.
    #[error("could not identify media from {0:?}")]
    UnknownMedia(String),

    /// Degenerate input, e.g. empty or made only of digits.
    #[error("malformed input {0:?}")]
    Malformed(String),
}

impl ParseError {
    pub(crate) fn invalid_tag(kind: &'static str, value: &str) -> Self {
        Self::InvalidTag {
            kind,
            value: value.to_string(),
        }
    }
}

/// `merge` was called with media that is not similar to the receiver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The two media do not describe the same logical item.
    #[error("cannot merge {source_id} into dissimilar {target_id}")]
    NotSimilar {
        /// Identity of the media being merged into.
        target_id: String,
        /// Identity of the media providing the data.
        source_id: String,
    },
}

impl MergeError {
    /// Build a [`MergeError::NotSimilar`] from the two media involved.
    pub fn not_similar(target: &dyn MediaItem, source: &dyn MediaItem) -> Self {
        Self::NotSimilar {
            target_id: target.identity(),
            source_id: source.identity(),
        }
    }
}
