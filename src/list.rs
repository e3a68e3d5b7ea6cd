//! An ordered list of media with filtering helpers.
//!
//! Every filter leaves the receiver untouched and returns a new list holding
//! the matching elements in their original order.

use chrono::{DateTime, Duration, Utc};
use reelmatch_parser::{Media, MediaItem};
use serde::Serialize;

use crate::local::Timestamped;

/// An ordered sequence of media entities.
///
/// Serializes as a JSON array of each element's own representation.
///
/// # Examples
///
/// ```rust
/// use reelmatch::parser::{parse_media, MediaItem};
/// use reelmatch::MediaList;
///
/// let mut list = MediaList::new();
/// assert!(list.is_empty());
/// list.push(parse_media("Heat.1995.1080p").unwrap());
/// list.push(parse_media("Arrow.S02E07.720p").unwrap());
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.filter_movies().len(), 1);
/// assert_eq!(list.filter_episodes().into_vec()[0].identity(), "arrow:2:7");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MediaList<M = Media> {
    items: Vec<M>,
}

impl<M> MediaList<M> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an element.
    pub fn push(&mut self, media: M) {
        self.items.push(media);
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.items.iter()
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, M> {
        self.items.iter_mut()
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[M] {
        &self.items
    }

    /// Take the elements out of the list.
    pub fn into_vec(self) -> Vec<M> {
        self.items
    }
}

impl<M: MediaItem + Clone> MediaList<M> {
    /// Copy of every element, in order.
    pub fn list(&self) -> Vec<M> {
        self.items.clone()
    }

    /// Keep the elements for which `predicate` returns true.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&M) -> bool,
    {
        self.items.iter().filter(|m| predicate(m)).cloned().collect()
    }

    /// Movies and episodes.
    pub fn filter_video(&self) -> Self {
        self.filter(|m| m.is_video())
    }

    /// Movies only.
    pub fn filter_movies(&self) -> Self {
        self.filter(|m| m.as_movie().is_some())
    }

    /// Episodes only.
    pub fn filter_episodes(&self) -> Self {
        self.filter(|m| m.as_episode().is_some())
    }

    /// Subtitles only.
    pub fn filter_subtitles(&self) -> Self {
        self.filter(|m| m.as_subtitle().is_some())
    }
}

impl<M: MediaItem + Timestamped + Clone> MediaList<M> {
    /// Keep elements modified within `within` of the current time.
    ///
    /// Elements without a modification time never pass. A negative duration
    /// only admits files modified in the future.
    pub fn filter_modified(&self, within: Duration) -> Self {
        self.filter_modified_at(within, Utc::now())
    }

    /// [`filter_modified`](Self::filter_modified) against a fixed `now`.
    pub fn filter_modified_at(&self, within: Duration, now: DateTime<Utc>) -> Self {
        self.filter(|m| m.modified().is_some_and(|modified| now - modified <= within))
    }
}

impl<M> Default for MediaList<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> From<Vec<M>> for MediaList<M> {
    fn from(items: Vec<M>) -> Self {
        Self { items }
    }
}

impl<M> FromIterator<M> for MediaList<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<M> Extend<M> for MediaList<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<M> IntoIterator for MediaList<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a MediaList<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocalMedia;
    use reelmatch_parser::{Episode, Language, Movie, Subtitle};

    fn sample() -> MediaList {
        let heat = Movie::new("Heat", 1995);
        vec![
            Media::from(heat.clone()),
            Media::from(Episode::new("Arrow", 2, 7)),
            Media::from(Subtitle::new(heat, Some(Language::French))),
        ]
        .into()
    }

    #[test]
    fn test_filters_keep_order_and_receiver() {
        let list = sample();
        assert_eq!(list.filter_video().len(), 2);
        assert_eq!(list.filter_movies().len(), 1);
        assert_eq!(list.filter_episodes().len(), 1);
        assert_eq!(list.filter_subtitles().len(), 1);
        assert_eq!(list.len(), 3);

        let ids: Vec<String> = list.filter_video().iter().map(|m| m.identity()).collect();
        assert_eq!(ids, ["heat:1995", "arrow:2:7"]);
    }

    #[test]
    fn test_filter_predicate() {
        let list = sample();
        let heat = list.filter(|m| m.identity().starts_with("heat"));
        assert_eq!(heat.len(), 2);
        assert!(list.filter(|_| false).is_empty());
    }

    #[test]
    fn test_filter_modified_at() {
        let now = Utc::now();
        let list: MediaList<LocalMedia> = vec![
            LocalMedia::new(Movie::new("Heat", 1995), "/m/a.mkv", 1, now - Duration::hours(2)),
            LocalMedia::new(Movie::new("Ronin", 1998), "/m/b.mkv", 1, now - Duration::days(3)),
        ]
        .into();

        let recent = list.filter_modified_at(Duration::hours(3), now);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent.as_slice()[0].identity(), "heat:1995");

        assert_eq!(list.filter_modified_at(Duration::days(7), now).len(), 2);
        assert!(list.filter_modified_at(Duration::hours(-1), now).is_empty());
    }

    #[test]
    fn test_unstamped_media_never_pass() {
        let list = sample();
        assert!(list.filter_modified(Duration::days(3650)).is_empty());
    }

    #[test]
    fn test_collect_and_extend() {
        let mut list: MediaList = sample().into_iter().take(1).collect();
        list.extend(sample().filter_episodes());
        list.push(Media::from(Movie::new("Ronin", 1998)));
        assert_eq!(list.len(), 3);
        assert_eq!(list.list().len(), 3);
        assert_eq!(list.into_vec()[2].identity(), "ronin:1998");
    }

    #[test]
    fn test_json_array() {
        let value = serde_json::to_value(sample()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["id"], "heat:1995");
        assert_eq!(items[2]["code"], "fr");
    }
}
