//! Media backed by a file on disk.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use reelmatch_parser::{Episode, Media, MediaItem, MergeError, Metadata, Movie, Parser, Subtitle};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::paths::{Extensions, FileKind};

/// Anything that may carry a filesystem modification time.
pub trait Timestamped {
    /// Modification time, or `None` when the value is not file-backed.
    fn modified(&self) -> Option<DateTime<Utc>>;
}

impl Timestamped for Media {
    fn modified(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// A parsed media entity together with the file it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalMedia {
    path: PathBuf,
    size: u64,
    modified: DateTime<Utc>,
    media: Media,
}

impl LocalMedia {
    /// Pair already parsed media with its file details.
    pub fn new(
        media: impl Into<Media>,
        path: impl Into<PathBuf>,
        size: u64,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            path: path.into(),
            size,
            modified,
            media: media.into(),
        }
    }

    /// Identify a file on disk using the built-in extension lists.
    pub fn from_path(path: &Path, parser: &Parser) -> Result<Self> {
        Self::from_path_with(path, parser, &Extensions::default())
    }

    /// Identify a file on disk.
    ///
    /// Subtitle files parse their stem as a subtitle, video files go through
    /// [`Parser::parse_media`]. Size and modification time come from the
    /// file's metadata.
    pub fn from_path_with(path: &Path, parser: &Parser, extensions: &Extensions) -> Result<Self> {
        let kind = extensions
            .classify(path)
            .ok_or_else(|| Error::unsupported(path.display().to_string()))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::unsupported(path.display().to_string()))?;

        let media = match kind {
            FileKind::Subtitle => Media::from(parser.parse_subtitle(stem)?),
            FileKind::Video => parser.parse_media(stem)?,
        };

        let meta = std::fs::metadata(path)?;
        let modified = DateTime::<Utc>::from(meta.modified()?);

        Ok(Self {
            path: path.to_path_buf(),
            size: meta.len(),
            modified,
            media,
        })
    }

    /// Where the file lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The parsed media.
    pub fn media(&self) -> &Media {
        &self.media
    }

    /// Drop the file details and keep the parsed media.
    pub fn into_media(self) -> Media {
        self.media
    }
}

impl Timestamped for LocalMedia {
    fn modified(&self) -> Option<DateTime<Utc>> {
        Some(self.modified)
    }
}

impl MediaItem for LocalMedia {
    fn identity(&self) -> String {
        self.media.identity()
    }

    fn metadata(&self) -> &Metadata {
        self.media.metadata()
    }

    fn similar(&self, other: &dyn MediaItem) -> bool {
        self.media.similar(other)
    }

    fn merge(&mut self, other: &dyn MediaItem) -> std::result::Result<(), MergeError> {
        self.media.merge(other)
    }

    fn as_movie(&self) -> Option<&Movie> {
        self.media.as_movie()
    }

    fn as_episode(&self) -> Option<&Episode> {
        self.media.as_episode()
    }

    fn as_subtitle(&self) -> Option<&Subtitle> {
        self.media.as_subtitle()
    }

    fn is_video(&self) -> bool {
        self.media.is_video()
    }
}

impl AsRef<Media> for LocalMedia {
    fn as_ref(&self) -> &Media {
        &self.media
    }
}

impl fmt::Display for LocalMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use reelmatch_parser::{Language, ParseError};

    #[test]
    fn test_from_path_video() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Inception.2010.1080p.BluRay.x264-SPARKS.mkv");
        std::fs::write(&path, b"video").unwrap();

        let local = LocalMedia::from_path(&path, &Parser::default()).unwrap();
        assert_eq!(local.identity(), "inception:2010");
        assert_eq!(local.size(), 5);
        assert_eq!(local.path(), path.as_path());
        assert!(local.is_video());
        assert!(local.modified().is_some());
        assert_eq!(local.to_string(), "Inception");
    }

    #[test]
    fn test_from_path_subtitle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("The.Office.S01E02.en.srt");
        std::fs::write(&path, b"1\n").unwrap();

        let local = LocalMedia::from_path(&path, &Parser::default()).unwrap();
        let sub = local.as_subtitle().unwrap();
        assert_eq!(sub.language(), Some(Language::English));
        assert_eq!(local.identity(), "theoffice:1:2:en");
        assert!(!local.is_video());
    }

    #[test]
    fn test_from_path_unsupported() {
        let path = Path::new("/tmp/Inception.2010.nfo");
        let result = LocalMedia::from_path(path, &Parser::default());
        assert_matches!(result, Err(Error::Unsupported(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Heat.1995.mkv");
        let result = LocalMedia::from_path(&path, &Parser::default());
        assert_matches!(result, Err(Error::Io(_)));
    }

    #[test]
    fn test_from_path_unparseable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holiday.mkv");
        std::fs::write(&path, b"").unwrap();
        let result = LocalMedia::from_path(&path, &Parser::default());
        assert_matches!(result, Err(Error::Parse(ParseError::UnknownMedia(_))));
    }

    #[test]
    fn test_merge_delegates() {
        let movie = Movie::new("inception", 2010);
        let mut local = LocalMedia::new(movie, "/m/inception.mkv", 1, Utc::now());
        local.merge(&Movie::new("Inception", 2010)).unwrap();
        assert_eq!(local.as_movie().unwrap().name(), "Inception");
        assert!(local.merge(&Movie::new("Heat", 1995)).is_err());
    }

    #[test]
    fn test_json() {
        let modified = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let local = LocalMedia::new(Movie::new("Heat", 1995), "/m/Heat.1995.mkv", 42, modified);
        let value = serde_json::to_value(&local).unwrap();
        assert_eq!(value["path"], "/m/Heat.1995.mkv");
        assert_eq!(value["size"], 42);
        assert_eq!(value["modified"], "2024-01-02T03:04:05Z");
        assert_eq!(value["media"]["id"], "heat:1995");
    }
}
