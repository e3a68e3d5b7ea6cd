use reelmatch_parser::config::ParserConfig;
use reelmatch_parser::MediaKind;
use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CAPACITY;
use crate::paths::Extensions;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub parser: ParserSettings,

    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Skip files and directories whose name starts with a dot
    #[serde(default = "default_true")]
    pub skip_hidden: bool,

    /// Skip small files with "sample" in their name
    #[serde(default = "default_true")]
    pub skip_samples: bool,

    /// Files at least this large are never treated as samples (default: 150 MiB)
    #[serde(default = "default_sample_max_bytes")]
    pub sample_max_bytes: u64,

    /// Video extensions recognised in addition to the built-in list
    #[serde(default)]
    pub extra_video_extensions: Vec<String>,

    /// Subtitle extensions recognised in addition to the built-in list
    #[serde(default)]
    pub extra_subtitle_extensions: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_sample_max_bytes() -> u64 {
    150 * 1024 * 1024
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            skip_samples: true,
            sample_max_bytes: default_sample_max_bytes(),
            extra_video_extensions: Vec::new(),
            extra_subtitle_extensions: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Built-in extension lists extended with the configured extras.
    pub fn extensions(&self) -> Extensions {
        Extensions::new(&self.extra_video_extensions, &self.extra_subtitle_extensions)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ParserSettings {
    /// Prefer this reading when a name matches more than one pattern
    #[serde(default)]
    pub media_type_hint: Option<MediaKind>,
}

impl From<&ParserSettings> for ParserConfig {
    fn from(settings: &ParserSettings) -> Self {
        ParserConfig {
            media_type_hint: settings.media_type_hint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of scraped results kept in memory (default: 512)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}
