//! Movie filename parser.

use once_cell::sync::Lazy;
use regex::Regex;

use super::check_input;
use super::normalize::clean_name;
use super::tags::scan_tags;
use crate::lexer::Lexer;
use crate::model::Movie;
use crate::ParseError;

// The greedy name picks the last plausible year, so titles that contain a
// year ("Blade.Runner.2049.2017") keep it.
static MOVIE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*[\w)])[\W_]+\(?((?:19|20)\d{2})\)?(?:[\W_].*)?$")
        .expect("movie pattern is valid")
});

pub(crate) fn parse(input: &str) -> Result<Movie, ParseError> {
    check_input(input)?;

    // The year is looked for ahead of each facet in turn, so a numeric group
    // ("x264-2019") is never taken for it. A title holding a facet word
    // ("Charlotte's.Web") falls through to the next facet.
    let lexer = Lexer::new(input);
    let caps = lexer
        .tokens()
        .iter()
        .filter(|(tok, _)| tok.is_facet())
        .find_map(|(_, span)| MOVIE_PATTERN.captures(&input[..span.start]))
        .or_else(|| MOVIE_PATTERN.captures(input))
        .ok_or_else(|| ParseError::NoYear(input.to_string()))?;

    let name = clean_name(&caps[1]);
    if name.is_empty() {
        return Err(ParseError::Malformed(input.to_string()));
    }
    let year = caps
        .get(2)
        .ok_or_else(|| ParseError::NoYear(input.to_string()))?;

    let tags = &input[year.end()..];
    let (_, metadata) = scan_tags(tags.strip_prefix(')').unwrap_or(tags));

    let year = year
        .as_str()
        .parse::<u16>()
        .map_err(|_| ParseError::NoYear(input.to_string()))?;

    Ok(Movie::new(name, year).with_metadata(metadata))
}
