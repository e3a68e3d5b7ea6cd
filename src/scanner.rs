//! Filesystem scanner.
//!
//! Walks directory trees, identifies every video and subtitle file it finds
//! and collects the results into a [`MediaList`].

use reelmatch_parser::{MediaItem, Parser};
use std::path::Path;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::list::MediaList;
use crate::local::LocalMedia;
use crate::paths::{is_hidden, Extensions};

/// Scanner for discovering media files on disk.
pub struct MediaScanner {
    config: ScanConfig,
    extensions: Extensions,
    parser: Parser,
}

impl MediaScanner {
    /// Create a scanner; extension lists are resolved from `config` once.
    pub fn new(config: ScanConfig, parser: Parser) -> Self {
        let extensions = config.extensions();
        Self {
            config,
            extensions,
            parser,
        }
    }

    /// Scan every root, in order, and collect the identified files.
    ///
    /// A root that does not exist is an error. Files that are not media or
    /// whose names cannot be identified are skipped.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> Result<MediaList<LocalMedia>> {
        let mut found = MediaList::new();
        for root in roots {
            let root = root.as_ref();
            if !root.exists() {
                return Err(Error::not_found(root.display().to_string()));
            }
            found.extend(self.scan_directory(root)?);
        }
        Ok(found)
    }

    /// Scan a single directory tree.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<LocalMedia>> {
        info!("Scanning directory: {:?}", root);
        let mut results = Vec::new();
        let mut skipped = 0usize;

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.skip_entry(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            let file_path = entry.path();
            if entry.file_type().is_dir() {
                continue;
            }

            if self.extensions.classify(file_path).is_none() {
                continue;
            }

            if self.is_sample(&entry) {
                debug!("Skipping sample file: {:?}", file_path);
                skipped += 1;
                continue;
            }

            match LocalMedia::from_path_with(file_path, &self.parser, &self.extensions) {
                Ok(media) => {
                    debug!(identity = %media.identity(), "Identified {:?}", file_path);
                    results.push(media);
                }
                Err(e) => {
                    debug!("Skipping {:?}: {}", file_path, e);
                    skipped += 1;
                }
            }
        }

        info!(
            root = ?root,
            found = results.len(),
            skipped,
            "Scan complete"
        );
        Ok(results)
    }

    fn skip_entry(&self, entry: &DirEntry) -> bool {
        self.config.skip_hidden && entry.depth() > 0 && is_hidden(entry.path())
    }

    fn is_sample(&self, entry: &DirEntry) -> bool {
        if !self.config.skip_samples {
            return false;
        }

        let named_sample = entry
            .path()
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase().contains("sample"))
            .unwrap_or(false);
        if !named_sample {
            return false;
        }

        entry
            .metadata()
            .map(|m| m.len() < self.config.sample_max_bytes)
            .unwrap_or(false)
    }
}
