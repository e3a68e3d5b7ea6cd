//! Reelmatch - identify media files by name
//!
//! The identification core lives in `reelmatch-parser`. This crate adds the
//! file-backed side: [`LocalMedia`], the [`MediaList`] container, the
//! filesystem [`MediaScanner`], an identity-keyed cache for scraped results
//! and the configuration used by the `reelmatch` binary.

pub mod cache;
pub mod config;
pub mod error;
pub mod list;
pub mod local;
pub mod paths;
pub mod scanner;
pub mod scraper;

pub use cache::IdentityCache;
pub use error::{Error, Result};
pub use list::MediaList;
pub use local::{LocalMedia, Timestamped};
pub use scanner::MediaScanner;
pub use scraper::{enrich, CachedScraper, EnrichReport, ScrapeError, Scraper};

pub use reelmatch_parser as parser;
