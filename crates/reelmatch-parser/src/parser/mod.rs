//! Filename parsers.
//!
//! Each parser matches a structural pattern (season/episode marker, release
//! year, trailing language code), cleans the name in front of it with
//! [`normalize`] and hands the remaining suffix to the [`tags`] scanner.

pub(crate) mod episode;
pub(crate) mod movie;
pub mod normalize;
pub(crate) mod subtitle;
pub mod tags;

use crate::config::ParserConfig;
use crate::model::{Media, MediaKind};
use crate::ParseError;

/// Identify a video name as an episode or a movie.
///
/// Episodes are tried first since a season marker is the stronger signal,
/// unless the configuration hints at movies.
pub(crate) fn parse_media(input: &str, config: &ParserConfig) -> Result<Media, ParseError> {
    check_input(input)?;

    let media = if config.media_type_hint == Some(MediaKind::Movie) {
        movie::parse(input)
            .map(Media::from)
            .or_else(|_| episode::parse(input).map(Media::from))
    } else {
        episode::parse(input)
            .map(Media::from)
            .or_else(|_| movie::parse(input).map(Media::from))
    };

    media.map_err(|err| match err {
        ParseError::Malformed(_) => err,
        _ => ParseError::UnknownMedia(input.to_string()),
    })
}

/// Reject input that cannot hold a name at all.
pub(crate) fn check_input(input: &str) -> Result<(), ParseError> {
    let trimmed = input.trim();
    let degenerate = !trimmed.chars().any(char::is_alphanumeric)
        || trimmed.chars().all(|c| c.is_ascii_digit());
    if degenerate {
        return Err(ParseError::Malformed(input.to_string()));
    }
    Ok(())
}
