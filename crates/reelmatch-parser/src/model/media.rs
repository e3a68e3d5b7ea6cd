//! The common media abstraction.

use super::{Episode, Metadata, Movie, Subtitle};
use crate::MergeError;

/// Behaviour shared by every media entity.
///
/// Callers branch on the capability queries (`as_movie`, `as_episode`,
/// `as_subtitle`) instead of on a concrete type. Wrappers such as file-backed
/// media implement this trait by delegating to the entity they hold, so
/// similarity and merging work across wrapped and bare values alike.
pub trait MediaItem: std::fmt::Display {
    /// Deterministic, case- and punctuation-insensitive key for caching and
    /// matching.
    fn identity(&self) -> String;

    /// Descriptive release metadata. Never used for matching.
    fn metadata(&self) -> &Metadata;

    /// True when `other` is the same kind of media describing the same item.
    fn similar(&self, other: &dyn MediaItem) -> bool;

    /// Copy enrichment fields from `other`.
    ///
    /// Fails without touching `self` when `other` is not [`similar`](Self::similar).
    fn merge(&mut self, other: &dyn MediaItem) -> Result<(), MergeError>;

    fn as_movie(&self) -> Option<&Movie> {
        None
    }

    fn as_episode(&self) -> Option<&Episode> {
        None
    }

    fn as_subtitle(&self) -> Option<&Subtitle> {
        None
    }

    /// Movies and episodes are videos.
    fn is_video(&self) -> bool {
        self.as_movie().is_some() || self.as_episode().is_some()
    }
}

/// Discriminant of [`Media`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Movie,
    Episode,
    Subtitle,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Episode => write!(f, "episode"),
            MediaKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "film" => Ok(MediaKind::Movie),
            "episode" | "tv" | "show" => Ok(MediaKind::Episode),
            "subtitle" | "sub" => Ok(MediaKind::Subtitle),
            _ => Err(crate::ParseError::invalid_tag("media kind", s)),
        }
    }
}

/// Any identified media entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Movie(Movie),
    Episode(Episode),
    Subtitle(Subtitle),
}

impl Media {
    /// Which variant this is.
    pub fn kind(&self) -> MediaKind {
        match self {
            Media::Movie(_) => MediaKind::Movie,
            Media::Episode(_) => MediaKind::Episode,
            Media::Subtitle(_) => MediaKind::Subtitle,
        }
    }

    fn inner(&self) -> &dyn MediaItem {
        match self {
            Media::Movie(m) => m,
            Media::Episode(e) => e,
            Media::Subtitle(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn MediaItem {
        match self {
            Media::Movie(m) => m,
            Media::Episode(e) => e,
            Media::Subtitle(s) => s,
        }
    }
}

impl MediaItem for Media {
    fn identity(&self) -> String {
        self.inner().identity()
    }

    fn metadata(&self) -> &Metadata {
        self.inner().metadata()
    }

    fn similar(&self, other: &dyn MediaItem) -> bool {
        self.inner().similar(other)
    }

    fn merge(&mut self, other: &dyn MediaItem) -> Result<(), MergeError> {
        self.inner_mut().merge(other)
    }

    fn as_movie(&self) -> Option<&Movie> {
        match self {
            Media::Movie(m) => Some(m),
            _ => None,
        }
    }

    fn as_episode(&self) -> Option<&Episode> {
        match self {
            Media::Episode(e) => Some(e),
            _ => None,
        }
    }

    fn as_subtitle(&self) -> Option<&Subtitle> {
        match self {
            Media::Subtitle(s) => Some(s),
            _ => None,
        }
    }
}

impl AsRef<Media> for Media {
    fn as_ref(&self) -> &Media {
        self
    }
}

impl std::fmt::Display for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Media::Movie(m) => write!(f, "{}", m),
            Media::Episode(e) => write!(f, "{}", e),
            Media::Subtitle(s) => write!(f, "{}", s),
        }
    }
}

impl From<Movie> for Media {
    fn from(movie: Movie) -> Self {
        Media::Movie(movie)
    }
}

impl From<Episode> for Media {
    fn from(episode: Episode) -> Self {
        Media::Episode(episode)
    }
}

impl From<Subtitle> for Media {
    fn from(subtitle: Subtitle) -> Self {
        Media::Subtitle(subtitle)
    }
}

impl std::str::FromStr for Media {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_media(s)
    }
}
