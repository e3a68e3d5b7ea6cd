//! TV episode entity.

use super::{MediaItem, Metadata};
use crate::parser::normalize::identity_key;
use crate::MergeError;

/// A single episode of a TV show.
///
/// Multi-episode files (`S01E01E02`) are represented by their first episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    show: String,
    season: u16,
    episode: u16,
    title: Option<String>,
    metadata: Metadata,
}

impl Episode {
    /// Create an episode with no title and empty metadata.
    pub fn new(show: impl Into<String>, season: u16, episode: u16) -> Self {
        Self {
            show: show.into(),
            season,
            episode,
            title: None,
            metadata: Metadata::default(),
        }
    }

    /// Set the episode title. An empty title clears it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    /// Replace the release metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Name of the show, e.g. `The Office`.
    pub fn show(&self) -> &str {
        &self.show
    }

    /// Season number.
    pub fn season(&self) -> u16 {
        self.season
    }

    /// Episode number within the season.
    pub fn episode(&self) -> u16 {
        self.episode
    }

    /// Episode title, when the filename or a scraper supplied one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn matches(&self, other: &Episode) -> bool {
        self.season == other.season
            && self.episode == other.episode
            && identity_key(&self.show) == identity_key(&other.show)
    }
}

impl MediaItem for Episode {
    fn identity(&self) -> String {
        format!(
            "{}:{}:{}",
            identity_key(&self.show),
            self.season,
            self.episode
        )
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn similar(&self, other: &dyn MediaItem) -> bool {
        other.as_episode().is_some_and(|e| self.matches(e))
    }

    fn merge(&mut self, other: &dyn MediaItem) -> Result<(), MergeError> {
        match other.as_episode() {
            Some(e) if self.matches(e) => {
                self.show = e.show.clone();
                if e.title.is_some() {
                    self.title = e.title.clone();
                }
                Ok(())
            }
            _ => Err(MergeError::not_similar(&*self, other)),
        }
    }

    fn as_episode(&self) -> Option<&Episode> {
        Some(self)
    }
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} S{:02}E{:02}", self.show, self.season, self.episode)
    }
}

impl std::str::FromStr for Episode {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_episode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Movie, Quality};

    #[test]
    fn display_pads_numbers() {
        assert_eq!(Episode::new("Arrow", 2, 7).to_string(), "Arrow S02E07");
        assert_eq!(Episode::new("Arrow", 12, 107).to_string(), "Arrow S12E107");
    }

    #[test]
    fn similarity_ignores_metadata() {
        let a = Episode::new("Westworld", 1, 5)
            .with_metadata(Metadata::new().with_quality(Quality::_720p));
        let b = Episode::new("westworld", 1, 5)
            .with_metadata(Metadata::new().with_quality(Quality::_2160p));
        assert!(a.similar(&b));
        assert!(b.similar(&a));
        assert!(!a.similar(&Episode::new("Westworld", 1, 6)));
        assert!(!a.similar(&Episode::new("Westworld", 2, 5)));
        assert!(!a.similar(&Movie::new("Westworld", 1973)));
    }

    #[test]
    fn merge_copies_show_and_title() {
        let mut local = Episode::new("the office us", 2, 1);
        let remote = Episode::new("The Office (US)", 2, 1).with_title("The Dundies");
        local.merge(&remote).unwrap();
        assert_eq!(local.show(), "The Office (US)");
        assert_eq!(local.title(), Some("The Dundies"));
        assert_eq!(local.identity(), "theofficeus:2:1");
    }

    #[test]
    fn merge_keeps_title_when_source_has_none() {
        let mut local = Episode::new("Arrow", 2, 7).with_title("State v Queen");
        local.merge(&Episode::new("Arrow", 2, 7)).unwrap();
        assert_eq!(local.title(), Some("State v Queen"));
    }

    #[test]
    fn merge_rejects_other_episode() {
        let mut local = Episode::new("Arrow", 2, 7);
        assert!(local.merge(&Episode::new("Arrow", 2, 8)).is_err());
        assert_eq!(local, Episode::new("Arrow", 2, 7));
    }
}
