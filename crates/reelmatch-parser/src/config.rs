//! Parser configuration.

use crate::model::MediaKind;

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use reelmatch_parser::config::ParserConfig;
/// use reelmatch_parser::MediaKind;
///
/// let config = ParserConfig::builder()
///     .media_type_hint(MediaKind::Movie)
///     .build();
/// assert_eq!(config.media_type_hint, Some(MediaKind::Movie));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Hint for the expected media type.
    ///
    /// With [`MediaKind::Movie`] a name that matches both patterns is read
    /// as a movie. Any other value keeps the default episode-first order.
    pub media_type_hint: Option<MediaKind>,
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    media_type_hint: Option<MediaKind>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media type hint.
    pub fn media_type_hint(mut self, hint: MediaKind) -> Self {
        self.media_type_hint = Some(hint);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            media_type_hint: self.media_type_hint,
        }
    }
}
