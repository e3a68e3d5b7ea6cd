//! Subtitle entity.

use super::language::{UNDETERMINED_CODE, UNDETERMINED_NAME};
use super::{Language, Media, MediaItem, Metadata};
use crate::MergeError;

/// A subtitle for a movie or episode.
///
/// Identity and similarity are derived from the target media plus the
/// language. The hearing-impaired flag cannot be recovered from a filename,
/// so parsed subtitles always report `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    target: Box<Media>,
    language: Option<Language>,
    hearing_impaired: bool,
}

impl Subtitle {
    /// Create a subtitle for `target`.
    ///
    /// A subtitle target is always a video: passing another subtitle uses
    /// that subtitle's target instead.
    pub fn new(target: impl Into<Media>, language: Option<Language>) -> Self {
        let target = match target.into() {
            Media::Subtitle(inner) => inner.target,
            other => Box::new(other),
        };
        Self {
            target,
            language,
            hearing_impaired: false,
        }
    }

    /// Mark the subtitle as made for the hearing impaired.
    pub fn with_hearing_impaired(mut self, hearing_impaired: bool) -> Self {
        self.hearing_impaired = hearing_impaired;
        self
    }

    /// The movie or episode this subtitle belongs to.
    pub fn target(&self) -> &Media {
        &self.target
    }

    /// Subtitle language, `None` when undetermined.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Language code, `und` when the language is unknown.
    pub fn code(&self) -> &'static str {
        self.language.map_or(UNDETERMINED_CODE, |l| l.code())
    }

    /// Whether the subtitle is for the hearing impaired.
    pub fn hearing_impaired(&self) -> bool {
        self.hearing_impaired
    }
}

impl MediaItem for Subtitle {
    fn identity(&self) -> String {
        format!("{}:{}", self.target.identity(), self.code())
    }

    fn metadata(&self) -> &Metadata {
        self.target.metadata()
    }

    fn similar(&self, other: &dyn MediaItem) -> bool {
        other
            .as_subtitle()
            .is_some_and(|s| self.target.similar(s.target()))
    }

    fn merge(&mut self, other: &dyn MediaItem) -> Result<(), MergeError> {
        match other.as_subtitle() {
            Some(s) if self.target.similar(s.target()) => self.target.merge(s.target()),
            _ => Err(MergeError::not_similar(&*self, other)),
        }
    }

    fn as_subtitle(&self) -> Option<&Subtitle> {
        Some(self)
    }

    fn is_video(&self) -> bool {
        false
    }
}

impl std::fmt::Display for Subtitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.language {
            Some(lang) => f.write_str(lang.name()),
            None => f.write_str(UNDETERMINED_NAME),
        }
    }
}

impl std::str::FromStr for Subtitle {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_subtitle(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Episode, Movie};

    #[test]
    fn identity_is_target_identity_plus_code() {
        let movie = Movie::new("Inception", 2010);
        let sub = Subtitle::new(movie.clone(), Some(Language::English));
        assert_eq!(sub.identity(), format!("{}:en", movie.identity()));
        assert_eq!(sub.to_string(), "English");
    }

    #[test]
    fn unknown_language_is_undetermined() {
        let sub = Subtitle::new(Episode::new("Arrow", 2, 7), None);
        assert_eq!(sub.identity(), "arrow:2:7:und");
        assert_eq!(sub.to_string(), "Undetermined");
        assert!(!sub.hearing_impaired());
    }

    #[test]
    fn nested_subtitle_target_is_flattened() {
        let inner = Subtitle::new(Movie::new("Heat", 1995), Some(Language::French));
        let outer = Subtitle::new(inner, Some(Language::German));
        assert!(outer.target().as_movie().is_some());
        assert_eq!(outer.identity(), "heat:1995:de");
    }

    #[test]
    fn similarity_requires_subtitle_with_similar_target() {
        let en = Subtitle::new(Movie::new("Heat", 1995), Some(Language::English));
        let de = Subtitle::new(Movie::new("HEAT", 1995), Some(Language::German));
        assert!(en.similar(&de));
        assert!(!en.similar(&Movie::new("Heat", 1995)));
        assert!(!en.similar(&Subtitle::new(Movie::new("Heat", 1996), None)));
    }

    #[test]
    fn merge_enriches_target() {
        let mut local = Subtitle::new(Episode::new("arrow", 2, 7), Some(Language::Spanish));
        let remote = Subtitle::new(
            Episode::new("Arrow", 2, 7).with_title("State v Queen"),
            None,
        );
        local.merge(&remote).unwrap();
        let episode = local.target().as_episode().unwrap();
        assert_eq!(episode.show(), "Arrow");
        assert_eq!(episode.title(), Some("State v Queen"));
        assert_eq!(local.language(), Some(Language::Spanish));

        assert!(local.merge(&Episode::new("Arrow", 2, 7)).is_err());
    }
}
