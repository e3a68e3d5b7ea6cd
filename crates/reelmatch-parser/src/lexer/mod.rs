//! Logos-based lexer for filename tag blocks.
//!
//! This module provides tokenization using the [logos](https://docs.rs/logos) crate,
//! which generates a fast lexer from regex patterns at compile time.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span fully contains a byte range.
    pub fn contains(&self, range: &Range<usize>) -> bool {
        self.start <= range.start && range.end <= self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A detected bracket group in the input.
///
/// Represents a matched pair of brackets (either `[...]` or `(...)`) with
/// spans for both the entire group and the content inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketGroup {
    /// The span of the entire bracket group including brackets.
    pub outer_span: Span,
    /// The span of the content inside the brackets.
    pub inner_span: Span,
    /// The bracket character used ('[' or '(').
    pub bracket_char: char,
}

/// Find all bracket groups in the input.
///
/// Groups are returned in the order their closing bracket appears. Unbalanced
/// brackets are ignored.
pub fn find_bracket_groups(input: &str) -> Vec<BracketGroup> {
    let mut groups = Vec::new();
    let mut stack: Vec<(usize, char)> = Vec::new();

    for (i, ch) in input.char_indices() {
        match ch {
            '[' | '(' => stack.push((i, ch)),
            ']' | ')' => {
                let open = if ch == ']' { '[' } else { '(' };
                if let Some((start, found)) = stack.pop() {
                    if found == open {
                        groups.push(BracketGroup {
                            outer_span: Span::new(start, i + 1),
                            inner_span: Span::new(start + 1, i),
                            bracket_char: open,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    groups
}

/// A lexer that tokenizes a tag block using Logos.
///
/// Characters outside the token vocabulary (commas, unicode punctuation) are
/// dropped rather than reported.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given input.
    ///
    /// Tokenizes the entire input string immediately.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
            .collect();
        Self { tokens, input }
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }

    /// Get the original input string.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Index of the last token that is not a delimiter.
    pub fn last_significant(&self) -> Option<usize> {
        self.tokens.iter().rposition(|(t, _)| !t.is_delimiter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input)
            .tokens()
            .iter()
            .map(|(t, _)| t.clone())
            .collect()
    }

    #[test]
    fn test_vocabulary_tokens() {
        let tokens = kinds("720p.HDTV.x264");
        assert_eq!(
            tokens,
            vec![
                Token::Quality("720p"),
                Token::Dot,
                Token::Source("HDTV"),
                Token::Dot,
                Token::Codec("x264"),
            ]
        );
    }

    #[test]
    fn test_compound_tags_are_single_tokens() {
        let tokens = kinds("WEB-DL.H.264");
        assert_eq!(
            tokens,
            vec![Token::Source("WEB-DL"), Token::Dot, Token::Codec("H.264")]
        );
    }

    #[test]
    fn test_words_containing_vocabulary_stay_words() {
        let tokens = kinds("Webster.Reality.Camera");
        assert!(tokens
            .iter()
            .filter(|t| !t.is_delimiter())
            .all(|t| matches!(t, Token::Word(_))));
    }

    #[test]
    fn test_group_after_hyphen() {
        let tokens = kinds("x264-DIMENSION");
        assert_eq!(
            tokens,
            vec![Token::Codec("x264"), Token::Hyphen, Token::Word("DIMENSION")]
        );
    }

    #[test]
    fn test_unknown_characters_are_dropped() {
        let tokens = kinds("Hello, World");
        assert_eq!(tokens, vec![Token::Word("Hello"), Token::Word("World")]);
    }

    #[test]
    fn test_last_significant_skips_trailing_delimiters() {
        let lexer = Lexer::new("720p.GRP..");
        let idx = lexer.last_significant().unwrap();
        assert_eq!(lexer.tokens()[idx].0, Token::Word("GRP"));
    }

    #[test]
    fn test_bracket_group_detection() {
        let groups = find_bracket_groups("[a][b](c)");
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2].bracket_char, '(');
        assert_eq!(groups[0].inner_span, Span::new(1, 2));
    }

    #[test]
    fn test_mismatched_brackets_ignored() {
        let groups = find_bracket_groups("[a) b]");
        assert!(groups.is_empty());
    }

    #[test]
    fn test_span_operations() {
        let span = Span::new(2, 6);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(span.contains(&(3..5)));
        assert!(!span.contains(&(5..8)));
    }
}
