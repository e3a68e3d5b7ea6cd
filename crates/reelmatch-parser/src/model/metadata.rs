//! The descriptive facet bundle attached to every parsed entity.

use super::{Codec, Misc, MiscTag, Quality, Source};

/// One recognized tag of any facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Quality(Quality),
    Source(Source),
    Codec(Codec),
    Misc(MiscTag),
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Quality(q) => write!(f, "{}", q),
            Tag::Source(s) => write!(f, "{}", s),
            Tag::Codec(c) => write!(f, "{}", c),
            Tag::Misc(m) => write!(f, "{}", m),
        }
    }
}

/// Release metadata: quality, source, codec, release group and misc tags.
///
/// Metadata describes a release but never identifies it. Two files of the
/// same movie with different metadata are still the same movie.
///
/// ```
/// use reelmatch_parser::{Codec, Metadata, Quality, Source};
///
/// let metadata = Metadata::new()
///     .with_quality(Quality::_1080p)
///     .with_source(Source::BluRay)
///     .with_codec(Codec::X264)
///     .with_group("GRP");
/// assert_eq!(metadata.to_string(), "1080p.BluRay.x264-GRP");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    quality: Option<Quality>,
    source: Option<Source>,
    codec: Option<Codec>,
    group: String,
    misc: Misc,
}

impl Metadata {
    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quality.
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Set the source.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the codec.
    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Set the release group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Add a misc tag, ignoring duplicates.
    pub fn with_misc(mut self, tag: MiscTag) -> Self {
        self.misc.push(tag);
        self
    }

    /// Resolution, if tagged.
    pub fn quality(&self) -> Option<Quality> {
        self.quality
    }

    /// Release source, if tagged.
    pub fn source(&self) -> Option<Source> {
        self.source
    }

    /// Video codec, if tagged.
    pub fn codec(&self) -> Option<Codec> {
        self.codec
    }

    /// Release group label, empty when unknown.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Misc tags in the order they were found.
    pub fn misc(&self) -> &Misc {
        &self.misc
    }

    /// True when no facet is set.
    pub fn is_empty(&self) -> bool {
        self.quality.is_none()
            && self.source.is_none()
            && self.codec.is_none()
            && self.group.is_empty()
            && self.misc.is_empty()
    }

    /// All recognized tags: quality, source, codec, then misc in order.
    ///
    /// The release group is a label rather than a tag and is not included.
    pub fn all_tags(&self) -> Vec<Tag> {
        let mut tags = Vec::with_capacity(3 + self.misc.len());
        tags.extend(self.quality.map(Tag::Quality));
        tags.extend(self.source.map(Tag::Source));
        tags.extend(self.codec.map(Tag::Codec));
        tags.extend(self.misc.iter().cloned().map(Tag::Misc));
        tags
    }

    // Used by the tag scanner, which fills facets incrementally and keeps the
    // first value of each.
    pub(crate) fn set_quality_once(&mut self, quality: Quality) {
        self.quality.get_or_insert(quality);
    }

    pub(crate) fn set_source_once(&mut self, source: Source) {
        self.source.get_or_insert(source);
    }

    pub(crate) fn set_codec_once(&mut self, codec: Codec) {
        self.codec.get_or_insert(codec);
    }

    pub(crate) fn set_group(&mut self, group: &str) {
        self.group = group.to_string();
    }

    pub(crate) fn push_misc(&mut self, tag: MiscTag) {
        self.misc.push(tag);
    }
}

impl std::fmt::Display for Metadata {
    /// Scene-style rendering, e.g. `720p.HDTV.x264.PROPER-GRP`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags: Vec<String> = self.all_tags().iter().map(Tag::to_string).collect();
        write!(f, "{}", tags.join("."))?;
        if !self.group.is_empty() {
            write!(f, "-{}", self.group)?;
        }
        Ok(())
    }
}
