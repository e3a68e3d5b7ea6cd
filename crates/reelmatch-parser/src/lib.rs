//! # reelmatch-parser
//!
//! Identify movies, TV episodes and subtitles from their filenames and
//! compare the results.
//!
//! Parsing turns a bare filename (extension removed) into a typed entity
//! carrying release [`Metadata`]. Every entity has a deterministic
//! [`identity`](MediaItem::identity), can test whether another entity
//! describes the same item ([`similar`](MediaItem::similar)) and can take
//! over enrichment fields from one ([`merge`](MediaItem::merge)).
//!
//! ## Quick Start
//!
//! ```
//! use reelmatch_parser::{parse_episode, MediaItem, Quality};
//!
//! let episode = parse_episode("The.Office.S01E02.720p.HDTV.x264-DIMENSION").unwrap();
//!
//! assert_eq!(episode.show(), "The Office");
//! assert_eq!(episode.to_string(), "The Office S01E02");
//! assert_eq!(episode.identity(), "theoffice:1:2");
//! assert_eq!(episode.metadata().quality(), Some(Quality::_720p));
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use reelmatch_parser::{MediaItem, MediaKind, Parser};
//! use reelmatch_parser::config::ParserConfig;
//!
//! let config = ParserConfig::builder()
//!     .media_type_hint(MediaKind::Movie)
//!     .build();
//!
//! let parser = Parser::new(config);
//! let media = parser.parse_media("Show.2010.S01E02").unwrap();
//! assert!(media.as_movie().is_some());
//! ```

pub mod config;
mod error;
pub mod lexer;
pub mod model;
mod parser;

pub use error::{MergeError, ParseError};
pub use model::{
    Codec, Episode, Language, Media, MediaItem, MediaKind, Metadata, Misc, MiscTag, Movie,
    Quality, Source, Subtitle, Tag,
};
pub use parser::normalize::{clean_name, identity_key};
pub use parser::tags::scan_tags;

use config::ParserConfig;

/// Parse an episode name such as `Show.Name.S01E02.720p.HDTV`.
pub fn parse_episode(input: &str) -> Result<Episode, ParseError> {
    parser::episode::parse(input)
}

/// Parse a movie name such as `Movie.Name.2010.1080p.BluRay`.
pub fn parse_movie(input: &str) -> Result<Movie, ParseError> {
    parser::movie::parse(input)
}

/// Parse a subtitle name such as `Movie.Name.2010.en` using default settings.
pub fn parse_subtitle(input: &str) -> Result<Subtitle, ParseError> {
    Parser::default().parse_subtitle(input)
}

/// Identify a video name as an episode or a movie using default settings.
pub fn parse_media(input: &str) -> Result<Media, ParseError> {
    Parser::default().parse_media(input)
}

/// A configurable filename parser.
///
/// ```
/// use reelmatch_parser::{MediaKind, Parser};
/// use reelmatch_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .media_type_hint(MediaKind::Episode)
///     .build();
///
/// let parser = Parser::new(config);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the parser's configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `input` as an episode, ignoring the media type hint.
    pub fn parse_episode(&self, input: &str) -> Result<Episode, ParseError> {
        parser::episode::parse(input)
    }

    /// Parse `input` as a movie, ignoring the media type hint.
    pub fn parse_movie(&self, input: &str) -> Result<Movie, ParseError> {
        parser::movie::parse(input)
    }

    /// Parse a subtitle name. The target is identified with
    /// [`parse_media`](Self::parse_media), so the media type hint applies.
    pub fn parse_subtitle(&self, input: &str) -> Result<Subtitle, ParseError> {
        parser::subtitle::parse(input, &self.config)
    }

    /// Identify a video name as an episode or a movie.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelmatch_parser::{MediaKind, Parser};
    ///
    /// let media = Parser::default().parse_media("Inception.2010.1080p").unwrap();
    /// assert_eq!(media.kind(), MediaKind::Movie);
    /// ```
    pub fn parse_media(&self, input: &str) -> Result<Media, ParseError> {
        parser::parse_media(input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_creation() {
        let parser = Parser::default();
        assert!(parser.config().media_type_hint.is_none());
    }

    #[test]
    fn test_from_str_dispatch() {
        let movie: Movie = "Heat.1995".parse().unwrap();
        assert_eq!(movie.year(), 1995);
        let episode: Episode = "Arrow.S02E07".parse().unwrap();
        assert_eq!(episode.season(), 2);
        let subtitle: Subtitle = "Heat.1995.fr".parse().unwrap();
        assert_eq!(subtitle.language(), Some(Language::French));
        let media: Media = "Arrow.S02E07".parse().unwrap();
        assert_eq!(media.kind(), MediaKind::Episode);
    }
}
