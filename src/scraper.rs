//! Scraper seam for enriching parsed media from an external catalogue.
//!
//! A [`Scraper`] turns a locally parsed entity into the catalogue's version
//! of the same item. [`CachedScraper`] adds an identity-keyed cache in front
//! of any scraper, and [`enrich`] merges scraped data back into a list.

use reelmatch_parser::{Media, MediaItem, MergeError, Subtitle};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::IdentityCache;
use crate::config::CacheConfig;
use crate::list::MediaList;

/// Failure reported by a scraper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    /// The catalogue has no entry for the media.
    #[error("No match for {0}")]
    NotFound(String),

    /// The catalogue could not be queried.
    #[error("Scraper {scraper} unavailable: {reason}")]
    Unavailable {
        scraper: &'static str,
        reason: String,
    },

    /// The scraped result could not be merged into the local media.
    #[error(transparent)]
    Merge(#[from] MergeError),
}

impl ScrapeError {
    /// No catalogue entry for `media`.
    pub fn not_found(media: &dyn MediaItem) -> Self {
        Self::NotFound(media.identity())
    }
}

/// A source of canonical media data.
///
/// Implementations should return media that is
/// [`similar`](MediaItem::similar) to the input so it can be merged.
pub trait Scraper: Send + Sync {
    /// Short name used in logs (e.g. "tmdb").
    fn name(&self) -> &'static str;

    /// Look up the catalogue entry for `media`.
    fn scrape(&self, media: &Media) -> Result<Media, ScrapeError>;
}

/// A scraper that consults an [`IdentityCache`] before the wrapped scraper.
///
/// Subtitles are scraped through their target and wrapped back into a
/// subtitle with the same language. Only successful results are cached.
pub struct CachedScraper<S> {
    inner: S,
    cache: IdentityCache<Media>,
}

impl<S: Scraper> CachedScraper<S> {
    /// Wrap `inner` with a cache holding at most `capacity` results.
    pub fn new(inner: S, capacity: usize) -> Self {
        Self {
            inner,
            cache: IdentityCache::new(capacity),
        }
    }

    /// Wrap `inner` with a cache sized by the `[cache]` config section.
    pub fn from_config(inner: S, config: &CacheConfig) -> Self {
        Self::new(inner, config.capacity)
    }

    /// The cache of successful scrapes.
    pub fn cache(&self) -> &IdentityCache<Media> {
        &self.cache
    }

    /// The wrapped scraper.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn scrape_uncached(&self, media: &Media) -> Result<Media, ScrapeError> {
        match media.as_subtitle() {
            Some(subtitle) => {
                let target = self.inner.scrape(subtitle.target())?;
                let rewrapped = Subtitle::new(target, subtitle.language())
                    .with_hearing_impaired(subtitle.hearing_impaired());
                Ok(Media::from(rewrapped))
            }
            None => self.inner.scrape(media),
        }
    }
}

impl<S: Scraper> Scraper for CachedScraper<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn scrape(&self, media: &Media) -> Result<Media, ScrapeError> {
        let identity = media.identity();
        if let Some(cached) = self.cache.get(&identity) {
            return Ok(cached);
        }

        debug!(identity = %identity, scraper = self.inner.name(), "Scraping media");
        let scraped = self.scrape_uncached(media)?;
        self.cache.insert(identity, scraped.clone());
        Ok(scraped)
    }
}

/// Outcome of an [`enrich`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichReport {
    /// Elements that were scraped and merged.
    pub merged: usize,
    /// Elements whose scrape or merge failed.
    pub failed: usize,
}

/// Scrape every element of `list` and merge the result into it.
///
/// Each element is scraped and merged once, in list order. Failures are
/// logged and counted; the element is left as it was.
pub fn enrich<M, S>(list: &mut MediaList<M>, scraper: &S) -> EnrichReport
where
    M: MediaItem + AsRef<Media>,
    S: Scraper + ?Sized,
{
    let mut report = EnrichReport::default();

    for item in list.iter_mut() {
        let result = scraper
            .scrape(item.as_ref())
            .and_then(|scraped| item.merge(&scraped).map_err(ScrapeError::from));

        match result {
            Ok(()) => report.merged += 1,
            Err(e) => {
                warn!(
                    identity = %item.identity(),
                    scraper = scraper.name(),
                    error = %e,
                    "Failed to enrich media"
                );
                report.failed += 1;
            }
        }
    }

    info!(
        merged = report.merged,
        failed = report.failed,
        scraper = scraper.name(),
        "Enrichment complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelmatch_parser::{parse_media, parse_subtitle, Episode, Language, Movie};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scraper answering from a fixed catalogue keyed by identity.
    struct Catalogue {
        entries: HashMap<String, Media>,
        calls: AtomicUsize,
    }

    impl Catalogue {
        fn new(entries: Vec<Media>) -> Self {
            Self {
                entries: entries.into_iter().map(|m| (m.identity(), m)).collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Scraper for Catalogue {
        fn name(&self) -> &'static str {
            "catalogue"
        }

        fn scrape(&self, media: &Media) -> Result<Media, ScrapeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entries
                .get(&media.identity())
                .cloned()
                .ok_or_else(|| ScrapeError::not_found(media))
        }
    }

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            Media::from(Movie::new("Leon: The Professional", 1994)),
            Media::from(Episode::new("The Office (US)", 2, 1).with_title("The Dundies")),
        ])
    }

    #[test]
    fn test_cached_scraper_hits_cache() {
        let scraper = CachedScraper::new(catalogue(), 8);
        let local = parse_media("The.Office.US.S02E01.720p").unwrap();

        let first = scraper.scrape(&local).unwrap();
        let second = scraper.scrape(&local).unwrap();
        assert_eq!(first, second);
        assert_eq!(scraper.inner().calls(), 1);
        assert_eq!(scraper.cache().len(), 1);
    }

    #[test]
    fn test_cache_sized_from_config() {
        let scraper = CachedScraper::from_config(catalogue(), &CacheConfig { capacity: 1 });
        assert_eq!(scraper.cache().capacity(), 1);

        scraper.scrape(&parse_media("The.Office.US.S02E01").unwrap()).unwrap();
        scraper.scrape(&parse_media("Leon.The.Professional.1994").unwrap()).unwrap();
        assert_eq!(scraper.cache().len(), 1);

        let default = CachedScraper::from_config(catalogue(), &CacheConfig::default());
        assert_eq!(default.cache().capacity(), crate::cache::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let scraper = CachedScraper::new(catalogue(), 8);
        let local = parse_media("Heat.1995").unwrap();

        assert!(scraper.scrape(&local).is_err());
        assert!(scraper.scrape(&local).is_err());
        assert_eq!(scraper.inner().calls(), 2);
        assert!(scraper.cache().is_empty());
    }

    #[test]
    fn test_subtitle_scraped_through_target() {
        let scraper = CachedScraper::new(catalogue(), 8);
        let local = Media::from(parse_subtitle("Leon.The.Professional.1994.de").unwrap());

        let scraped = scraper.scrape(&local).unwrap();
        let subtitle = scraped.as_subtitle().unwrap();
        assert_eq!(subtitle.language(), Some(Language::German));
        assert_eq!(subtitle.target().as_movie().unwrap().name(), "Leon: The Professional");
        assert!(local.similar(&scraped));
    }

    #[test]
    fn test_enrich_counts_merges_and_failures() {
        let scraper = CachedScraper::new(catalogue(), 8);
        let mut list: MediaList = vec![
            parse_media("The.Office.US.S02E01.720p.HDTV.x264-LOL").unwrap(),
            parse_media("Heat.1995.1080p").unwrap(),
            Media::from(parse_subtitle("The.Office.US.S02E01.en").unwrap()),
        ]
        .into();

        let report = enrich(&mut list, &scraper);
        assert_eq!(report, EnrichReport { merged: 2, failed: 1 });

        let items = list.as_slice();
        let episode = items[0].as_episode().unwrap();
        assert_eq!(episode.title(), Some("The Dundies"));
        assert_eq!(episode.metadata().group(), "LOL");
        assert_eq!(items[1].as_movie().unwrap().name(), "Heat");
        let subtitle = items[2].as_subtitle().unwrap();
        assert_eq!(subtitle.target().as_episode().unwrap().show(), "The Office (US)");
    }

    #[test]
    fn test_enrich_reports_dissimilar_results() {
        struct Wrong;
        impl Scraper for Wrong {
            fn name(&self) -> &'static str {
                "wrong"
            }
            fn scrape(&self, _media: &Media) -> Result<Media, ScrapeError> {
                Ok(Media::from(Movie::new("Ronin", 1998)))
            }
        }

        let mut list: MediaList = vec![parse_media("Heat.1995").unwrap()].into();
        let report = enrich(&mut list, &Wrong);
        assert_eq!(report.failed, 1);
        assert_eq!(list.as_slice()[0].as_movie().unwrap().name(), "Heat");
    }
}
