//! Miscellaneous release tags and their insertion-ordered set.

use crate::ParseError;

/// A free-form release tag that is not a quality, source or codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MiscTag {
    /// Fixed release of an earlier broken one
    Proper,
    /// Repackaged release
    Repack,
    /// REAL marker, usually paired with PROPER
    Real,
    /// Re-ripped from source
    Rerip,
    /// Extended cut
    Extended,
    /// Unrated cut
    Unrated,
    /// Uncut release
    Uncut,
    /// Theatrical cut
    Theatrical,
    /// Director's cut
    DirectorsCut,
    /// Remastered release
    Remastered,
    /// Untouched remux
    Remux,
    /// Limited theatrical run
    Limited,
    /// Internal release
    Internal,
    /// Dubbed audio
    Dubbed,
    /// Subtitled release
    Subbed,
    /// High dynamic range (HDR10, HDR10+)
    Hdr,
    /// IMAX presentation
    Imax,
    /// Complete season or series
    Complete,
    /// Any tag outside the known vocabulary, kept verbatim.
    Other(String),
}

impl MiscTag {
    /// Whether the tag is part of the known vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, MiscTag::Other(_))
    }

    /// Canonicalize `text`, falling back to [`MiscTag::Other`].
    pub fn from_text(text: &str) -> Self {
        text.parse()
            .unwrap_or_else(|_| MiscTag::Other(text.to_string()))
    }
}

impl std::fmt::Display for MiscTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MiscTag::Proper => write!(f, "PROPER"),
            MiscTag::Repack => write!(f, "REPACK"),
            MiscTag::Real => write!(f, "REAL"),
            MiscTag::Rerip => write!(f, "RERIP"),
            MiscTag::Extended => write!(f, "EXTENDED"),
            MiscTag::Unrated => write!(f, "UNRATED"),
            MiscTag::Uncut => write!(f, "UNCUT"),
            MiscTag::Theatrical => write!(f, "THEATRICAL"),
            MiscTag::DirectorsCut => write!(f, "DIRECTORS.CUT"),
            MiscTag::Remastered => write!(f, "REMASTERED"),
            MiscTag::Remux => write!(f, "REMUX"),
            MiscTag::Limited => write!(f, "LIMITED"),
            MiscTag::Internal => write!(f, "INTERNAL"),
            MiscTag::Dubbed => write!(f, "DUBBED"),
            MiscTag::Subbed => write!(f, "SUBBED"),
            MiscTag::Hdr => write!(f, "HDR"),
            MiscTag::Imax => write!(f, "IMAX"),
            MiscTag::Complete => write!(f, "COMPLETE"),
            MiscTag::Other(text) => write!(f, "{}", text),
        }
    }
}

impl std::str::FromStr for MiscTag {
    type Err = ParseError;

    /// Parses known tags only. Separators inside compound tags are ignored,
    /// so `Directors.Cut` and `DIRECTORS_CUT` are the same tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '.' | '_' | ' ' | '-'))
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "proper" => Ok(MiscTag::Proper),
            "repack" => Ok(MiscTag::Repack),
            "real" => Ok(MiscTag::Real),
            "rerip" => Ok(MiscTag::Rerip),
            "extended" => Ok(MiscTag::Extended),
            "unrated" => Ok(MiscTag::Unrated),
            "uncut" => Ok(MiscTag::Uncut),
            "theatrical" => Ok(MiscTag::Theatrical),
            "directorscut" => Ok(MiscTag::DirectorsCut),
            "remastered" => Ok(MiscTag::Remastered),
            "remux" => Ok(MiscTag::Remux),
            "limited" => Ok(MiscTag::Limited),
            "internal" => Ok(MiscTag::Internal),
            "dubbed" => Ok(MiscTag::Dubbed),
            "subbed" => Ok(MiscTag::Subbed),
            "hdr" | "hdr10" | "hdr10+" => Ok(MiscTag::Hdr),
            "imax" => Ok(MiscTag::Imax),
            "complete" => Ok(MiscTag::Complete),
            _ => Err(ParseError::invalid_tag("misc tag", s)),
        }
    }
}

/// Insertion-ordered set of [`MiscTag`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Misc(Vec<MiscTag>);

impl Misc {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn push(&mut self, tag: MiscTag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Whether the tag is present.
    pub fn contains(&self, tag: &MiscTag) -> bool {
        self.0.contains(tag)
    }

    /// Tags in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MiscTag> {
        self.0.iter()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tag was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<MiscTag> for Misc {
    fn from_iter<I: IntoIterator<Item = MiscTag>>(iter: I) -> Self {
        let mut misc = Misc::new();
        for tag in iter {
            misc.push(tag);
        }
        misc
    }
}

impl<'a> IntoIterator for &'a Misc {
    type Item = &'a MiscTag;
    type IntoIter = std::slice::Iter<'a, MiscTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
