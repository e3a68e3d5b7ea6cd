//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized in the tag block of a filename.
///
/// Vocabulary tokens carry the raw text they matched so that the tag model can
/// canonicalize it. Compound tags that contain separators (`WEB-DL`, `H.264`)
/// are single tokens.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Video quality (e.g., 720p, 1080i, 2160p, 4K)
    #[regex(
        r"(?i)((4320|2160|1440|1080|720|576|480|360)[pi]|4k|8k)",
        priority = 10
    )]
    Quality(&'src str),

    /// H.264/H.265 and friends (e.g., x264, H.265, HEVC, XviD)
    #[regex(
        r"(?i)(x264|x265|h\.?264|h\.?265|hevc|avc|xvid|divx|av1|vp9)",
        priority = 8
    )]
    Codec(&'src str),

    /// Release source (e.g., BluRay, WEB-DL, HDTV, DVDRip)
    #[regex(
        r"(?i)(blu-?ray|bdrip|brrip|web-?dl|web-?rip|web|hdtv|pdtv|sdtv|dvd-?rip|dvd|hd-?rip|hdcam|cam-?rip|cam|telesync|hdts|screener|dvdscr|vhs-?rip)",
        priority = 7
    )]
    Source(&'src str),

    /// Known miscellaneous tags (e.g., PROPER, REPACK, EXTENDED)
    #[regex(
        r"(?i)(proper|repack|real|rerip|extended|unrated|uncut|theatrical|directors[._ ]?cut|remastered|remux|limited|internal|dubbed|subbed|hdr(10\+?)?|imax|complete)",
        priority = 6
    )]
    Misc(&'src str),

    /// Dot delimiter
    #[token(".")]
    Dot,

    /// Hyphen delimiter
    #[token("-")]
    Hyphen,

    /// Underscore delimiter
    #[token("_")]
    Underscore,

    /// Opening square bracket
    #[token("[")]
    BracketOpen,

    /// Closing square bracket
    #[token("]")]
    BracketClose,

    /// Opening parenthesis
    #[token("(")]
    ParenOpen,

    /// Closing parenthesis
    #[token(")")]
    ParenClose,

    /// Generic word token (lower priority than vocabulary patterns)
    #[regex(r"[a-zA-Z][a-zA-Z0-9'&+]*", priority = 1)]
    Word(&'src str),

    /// Numeric token
    #[regex(r"[0-9]+", priority = 2)]
    Number(&'src str),
}

impl Token<'_> {
    /// Separator tokens between words.
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::Dot | Token::Hyphen | Token::Underscore)
    }

    /// Quality, source or codec tokens. These always open the tag block.
    pub fn is_facet(&self) -> bool {
        matches!(self, Token::Quality(_) | Token::Source(_) | Token::Codec(_))
    }
}
