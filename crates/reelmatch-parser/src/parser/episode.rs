//! Episode filename parser.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::clean_name;
use super::tags::scan_tags;
use super::check_input;
use crate::model::Episode;
use crate::ParseError;

// name, separator, optional S, season, E/x marker, episode, an optional second
// episode number which is discarded, then the tag suffix. The suffix keeps its
// leading separator so a "-GRP" or "[GRP]" group survives.
static EPISODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?[\w)]+)[\W_]+?[Ss]?(\d{1,2})[Eex](\d{1,2})(?:[Ee]\d{1,3})?(\D.*)?$")
        .expect("episode pattern is valid")
});

pub(crate) fn parse(input: &str) -> Result<Episode, ParseError> {
    check_input(input)?;

    let caps = EPISODE_PATTERN
        .captures(input)
        .ok_or_else(|| ParseError::NoEpisodeMarker(input.to_string()))?;

    let show = clean_name(&caps[1]);
    if show.is_empty() {
        return Err(ParseError::Malformed(input.to_string()));
    }
    let number = |i: usize| {
        caps[i]
            .parse::<u16>()
            .map_err(|_| ParseError::NoEpisodeMarker(input.to_string()))
    };
    let season = number(2)?;
    let episode = number(3)?;

    let tags = caps.get(4).map_or("", |m| m.as_str());
    let (boundary, metadata) = scan_tags(tags);

    Ok(Episode::new(show, season, episode)
        .with_title(clean_name(&tags[..boundary]))
        .with_metadata(metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Codec, MediaItem, Quality, Source};
    use assert_matches::assert_matches;

    #[test]
    fn scene_name() {
        let ep = parse("The.Office.S01E02.720p.HDTV.x264-DIMENSION").unwrap();
        assert_eq!(ep.show(), "The Office");
        assert_eq!((ep.season(), ep.episode()), (1, 2));
        assert_eq!(ep.title(), None);
        assert_eq!(ep.metadata().quality(), Some(Quality::_720p));
        assert_eq!(ep.metadata().source(), Some(Source::Hdtv));
        assert_eq!(ep.metadata().codec(), Some(Codec::X264));
        assert_eq!(ep.metadata().group(), "DIMENSION");
    }

    #[test]
    fn episode_title_before_tags() {
        let ep = parse("Westworld.S01E05.Contrapasso.1080p.WEB-DL").unwrap();
        assert_eq!(ep.title(), Some("Contrapasso"));
        assert_eq!(ep.metadata().source(), Some(Source::WebDl));
    }

    #[test]
    fn cross_notation() {
        let ep = parse("Arrow 2x07 State v Queen").unwrap();
        assert_eq!(ep.show(), "Arrow");
        assert_eq!((ep.season(), ep.episode()), (2, 7));
        assert_eq!(ep.title(), Some("State v Queen"));
    }

    #[test]
    fn identity_survives_naming_variance() {
        let dotted = parse("The.Office.S01E02").unwrap();
        let underscored = parse("The_Office_S1E2").unwrap();
        assert_eq!(dotted.identity(), underscored.identity());
        assert_eq!(underscored.show(), "The Office");
    }

    #[test]
    fn multi_episode_keeps_first_number() {
        let ep = parse("Friends.S01E01E02.720p").unwrap();
        assert_eq!(ep.episode(), 1);
        assert_eq!(ep.metadata().quality(), Some(Quality::_720p));
    }

    #[test]
    fn numeric_show_name() {
        let ep = parse("24.S01E01.HDTV").unwrap();
        assert_eq!(ep.show(), "24");
    }

    #[test]
    fn group_directly_after_marker() {
        let bracketed = parse("Show.S01E02.[GRP]").unwrap();
        assert_eq!(bracketed.title(), None);
        assert_eq!(bracketed.metadata().group(), "GRP");

        let hyphenated = parse("Show.S01E02-GRP").unwrap();
        assert_eq!(hyphenated.title(), None);
        assert_eq!(hyphenated.metadata().group(), "GRP");
    }

    #[test]
    fn rendered_source_is_recognised_again() {
        for source in [Source::Telesync, Source::Screener] {
            let ep = parse(&format!("Show.S01E02.{source}")).unwrap();
            assert_eq!(ep.metadata().source(), Some(source));
            assert_eq!(ep.title(), None);
        }
    }

    #[test]
    fn three_digit_second_episode_is_discarded() {
        let ep = parse("Show S01E99E100").unwrap();
        assert_eq!(ep.episode(), 99);
        assert_eq!(ep.title(), None);
        assert_eq!(ep.identity(), "show:1:99");
    }

    #[test]
    fn missing_marker_fails() {
        assert_matches!(
            parse("Inception.2010.1080p.BluRay"),
            Err(ParseError::NoEpisodeMarker(_))
        );
    }

    #[test]
    fn degenerate_input_is_malformed() {
        assert_matches!(parse(""), Err(ParseError::Malformed(_)));
        assert_matches!(parse("   "), Err(ParseError::Malformed(_)));
        assert_matches!(parse("0102"), Err(ParseError::Malformed(_)));
        assert_matches!(parse(") S01E02"), Err(ParseError::Malformed(_)));
    }
}
