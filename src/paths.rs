//! Path utilities for detecting media file types by extension.
//!
//! The scanner and [`LocalMedia`](crate::LocalMedia) use these to decide
//! which parser a file goes through.

use std::path::Path;

/// List of supported video file extensions.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "avi", "mkv", "mp4", "m4v", "flv", "mov", "wmv", "webm", "mpg", "mpeg", "ts",
];

/// List of supported subtitle file extensions.
pub const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "ssa", "sub", "vtt"];

/// What kind of file a path names, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Video,
    Subtitle,
}

/// Extension lists used to classify files.
///
/// The built-in lists always apply; `extra_*` entries from the
/// configuration are added on top.
#[derive(Debug, Clone, Default)]
pub struct Extensions {
    extra_video: Vec<String>,
    extra_subtitle: Vec<String>,
}

impl Extensions {
    /// Built-in extensions plus the given extras.
    pub fn new(extra_video: &[String], extra_subtitle: &[String]) -> Self {
        Self {
            extra_video: normalize(extra_video),
            extra_subtitle: normalize(extra_subtitle),
        }
    }

    /// Classify a path, or `None` if it is neither video nor subtitle.
    pub fn classify(&self, path: &Path) -> Option<FileKind> {
        let ext = extension(path)?;
        if SUBTITLE_EXTENSIONS.contains(&ext.as_str()) || self.extra_subtitle.contains(&ext) {
            Some(FileKind::Subtitle)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) || self.extra_video.contains(&ext) {
            Some(FileKind::Video)
        } else {
            None
        }
    }
}

fn normalize(exts: &[String]) -> Vec<String> {
    exts.iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use reelmatch::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.MP4")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path has a subtitle file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use reelmatch::paths::is_subtitle_file;
///
/// assert!(is_subtitle_file(Path::new("movie.en.srt")));
/// assert!(!is_subtitle_file(Path::new("video.mkv")));
/// ```
pub fn is_subtitle_file(path: &Path) -> bool {
    extension(path)
        .map(|ext| SUBTITLE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path names a hidden entry (leading `.`).
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
