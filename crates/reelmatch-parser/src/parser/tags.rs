//! Tag-block scanner.
//!
//! Splits the suffix left over after a structural match (`S01E02`, a year)
//! into a descriptive title and a trailing block of release tags.

use std::ops::Range;

use crate::lexer::{find_bracket_groups, Lexer, Token};
use crate::model::{Metadata, MiscTag};

/// Release group found at the end of the suffix.
struct GroupMarker<'src> {
    name: &'src str,
    /// Byte offset where the marker starts.
    start: usize,
    /// Token indices belonging to the marker.
    tokens: Range<usize>,
}

/// Scan `suffix` for its tag block.
///
/// Returns the byte offset where the tag block starts together with the
/// metadata found in it. Text before the offset is a candidate title. When
/// nothing in the suffix looks like a tag the offset is `suffix.len()`.
///
/// The scan never fails. Unknown words after the boundary are kept as
/// [`MiscTag::Other`] and bare numbers (the `5` and `1` of `5.1`) are dropped.
pub fn scan_tags(suffix: &str) -> (usize, Metadata) {
    let lexer = Lexer::new(suffix);
    let tokens = lexer.tokens();
    let mut metadata = Metadata::new();

    let group = find_group(&lexer);
    let group_tokens = group.as_ref().map_or(0..0, |g| g.tokens.clone());

    let marker = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| !group_tokens.contains(i))
        .find(|(_, (tok, _))| is_boundary_marker(tok))
        .map(|(_, (_, span))| span.start);

    let boundary = match (&group, marker) {
        (Some(g), Some(m)) => m.min(g.start),
        (Some(g), None) => g.start,
        (None, Some(m)) => m,
        (None, None) => suffix.len(),
    };

    for (i, (tok, span)) in tokens.iter().enumerate() {
        if span.start < boundary || group_tokens.contains(&i) {
            continue;
        }
        collect(tok, &mut metadata);
    }

    if let Some(g) = group {
        metadata.set_group(g.name);
    }

    (boundary, metadata)
}

fn collect(tok: &Token<'_>, metadata: &mut Metadata) {
    match tok {
        Token::Quality(t) => {
            if let Ok(q) = t.parse() {
                metadata.set_quality_once(q);
            }
        }
        Token::Source(t) => {
            if let Ok(s) = t.parse() {
                metadata.set_source_once(s);
            }
        }
        Token::Codec(t) => {
            if let Ok(c) = t.parse() {
                metadata.set_codec_once(c);
            }
        }
        Token::Misc(t) | Token::Word(t) => metadata.push_misc(MiscTag::from_text(t)),
        _ => {}
    }
}

/// Facets always start the tag block. Known misc tags only do so when
/// written in capitals, so that title words like "Real" stay in the title.
fn is_boundary_marker(tok: &Token<'_>) -> bool {
    match tok {
        Token::Misc(t) => !t.chars().any(char::is_lowercase),
        other => other.is_facet(),
    }
}

fn find_group<'src>(lexer: &Lexer<'src>) -> Option<GroupMarker<'src>> {
    let tokens = lexer.tokens();
    let last = lexer.last_significant()?;

    match tokens[last].0 {
        Token::BracketClose => bracket_group(lexer, last),
        Token::Word(name) | Token::Number(name) if is_group_hyphen(lexer, last) => {
            Some(GroupMarker {
                name,
                start: tokens[last].1.start,
                tokens: last..last + 1,
            })
        }
        _ => None,
    }
}

/// The hyphen before `word` touches it and is not a spaced " - " separator.
fn is_group_hyphen(lexer: &Lexer<'_>, word: usize) -> bool {
    let tokens = lexer.tokens();
    if word == 0 || tokens[word - 1].0 != Token::Hyphen {
        return false;
    }
    let hyphen = &tokens[word - 1].1;
    hyphen.end == tokens[word].1.start
        && !lexer.input()[..hyphen.start].ends_with(char::is_whitespace)
}

/// A trailing `[...]` group is a release group unless it holds tags.
fn bracket_group<'src>(lexer: &Lexer<'src>, close: usize) -> Option<GroupMarker<'src>> {
    let input = lexer.input();
    let tokens = lexer.tokens();
    let close_end = tokens[close].1.end;

    let group = find_bracket_groups(input)
        .into_iter()
        .find(|g| g.bracket_char == '[' && g.outer_span.end == close_end)?;

    let inner = group.inner_span.start..group.inner_span.end;
    let inside: Vec<usize> = (0..tokens.len())
        .filter(|&i| group.outer_span.contains(&tokens[i].1))
        .collect();

    let holds_tags = inside.iter().any(|&i| {
        let span = &tokens[i].1;
        span.start >= inner.start && span.end <= inner.end && tokens[i].0.is_facet()
    });
    let name = input[inner].trim();
    if holds_tags || name.is_empty() {
        return None;
    }

    let first = *inside.first()?;
    let last = *inside.last()?;
    Some(GroupMarker {
        name,
        start: group.outer_span.start,
        tokens: first..last + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Codec, Quality, Source};

    #[test]
    fn empty_suffix() {
        let (boundary, metadata) = scan_tags("");
        assert_eq!(boundary, 0);
        assert!(metadata.is_empty());
    }

    #[test]
    fn no_tags_means_whole_suffix_is_title() {
        let suffix = "The Dundies";
        let (boundary, metadata) = scan_tags(suffix);
        assert_eq!(boundary, suffix.len());
        assert!(metadata.is_empty());
    }

    #[test]
    fn title_then_tags() {
        let suffix = "Pilot.720p.HDTV.x264-DIMENSION";
        let (boundary, metadata) = scan_tags(suffix);
        assert_eq!(&suffix[..boundary], "Pilot.");
        assert_eq!(metadata.quality(), Some(Quality::_720p));
        assert_eq!(metadata.source(), Some(Source::Hdtv));
        assert_eq!(metadata.codec(), Some(Codec::X264));
        assert_eq!(metadata.group(), "DIMENSION");
        assert!(metadata.misc().is_empty());
    }

    #[test]
    fn unknown_words_after_boundary_are_misc() {
        let (boundary, metadata) = scan_tags("1080p.WEB-DL.DD5.1.H.264.PROPER-NTb");
        assert_eq!(boundary, 0);
        assert_eq!(metadata.source(), Some(Source::WebDl));
        assert_eq!(metadata.codec(), Some(Codec::H264));
        assert_eq!(metadata.group(), "NTb");
        assert_eq!(
            metadata.misc().iter().cloned().collect::<Vec<_>>(),
            vec![MiscTag::Other("DD5".into()), MiscTag::Proper]
        );
    }

    #[test]
    fn first_facet_wins() {
        let (_, metadata) = scan_tags("720p.1080p.HDTV.BluRay");
        assert_eq!(metadata.quality(), Some(Quality::_720p));
        assert_eq!(metadata.source(), Some(Source::Hdtv));
    }

    #[test]
    fn uppercase_misc_tag_marks_boundary() {
        let suffix = "Final.Cut.EXTENDED.1080p";
        let (boundary, metadata) = scan_tags(suffix);
        assert_eq!(&suffix[..boundary], "Final.Cut.");
        assert!(metadata.misc().contains(&MiscTag::Extended));
    }

    #[test]
    fn title_case_misc_word_stays_in_title() {
        let suffix = "The.Real.Thing.720p.HDTV";
        let (boundary, _) = scan_tags(suffix);
        assert_eq!(&suffix[..boundary], "The.Real.Thing.");
    }

    #[test]
    fn bracket_group() {
        let suffix = "Chapter One 1080p [YTS]";
        let (boundary, metadata) = scan_tags(suffix);
        assert_eq!(&suffix[..boundary], "Chapter One ");
        assert_eq!(metadata.group(), "YTS");
        assert!(metadata.misc().is_empty());
    }

    #[test]
    fn bracket_group_alone_ends_title() {
        let suffix = "Chapter One [YTS]";
        let (boundary, metadata) = scan_tags(suffix);
        assert_eq!(&suffix[..boundary], "Chapter One ");
        assert_eq!(metadata.group(), "YTS");
    }

    #[test]
    fn bracket_with_tags_is_not_a_group() {
        let (_, metadata) = scan_tags("[1080p]");
        assert_eq!(metadata.quality(), Some(Quality::_1080p));
        assert_eq!(metadata.group(), "");
    }

    #[test]
    fn trailing_separators_are_ignored() {
        let suffix = "720p.HDTV-LOL..";
        let (_, metadata) = scan_tags(suffix);
        assert_eq!(metadata.group(), "LOL");
    }

    #[test]
    fn spaced_hyphen_is_not_a_group_marker() {
        let (boundary, metadata) = scan_tags(" - Word");
        assert_eq!(boundary, 7);
        assert_eq!(metadata.group(), "");

        let (boundary, metadata) = scan_tags(".Pilot -Word");
        assert_eq!(boundary, 12);
        assert_eq!(metadata.group(), "");
    }

    #[test]
    fn hyphen_group_at_suffix_start() {
        let (boundary, metadata) = scan_tags("-GRP");
        assert_eq!(boundary, 0);
        assert_eq!(metadata.group(), "GRP");
    }
}
