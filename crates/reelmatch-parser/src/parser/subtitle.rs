//! Subtitle filename parser.

use crate::config::ParserConfig;
use crate::model::{Language, Subtitle};
use crate::ParseError;

/// Parse a subtitle name such as `Inception.2010.720p.en`.
///
/// A trailing dot-separated language code is recorded and stripped; the rest
/// must parse as a movie or episode.
pub(crate) fn parse(input: &str, config: &ParserConfig) -> Result<Subtitle, ParseError> {
    let Some((_, last)) = input.rsplit_once('.') else {
        return Err(ParseError::NoSubtitleSplit(input.to_string()));
    };

    let language = Language::lookup(last);
    let target_name = match language {
        Some(_) => &input[..input.len() - last.len()],
        None => input,
    };

    let target = super::parse_media(target_name, config)?;
    Ok(Subtitle::new(target, language))
}
