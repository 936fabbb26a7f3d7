//! Sequential batch pipeline with per-URL failure isolation.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::ExtractionError;
use crate::extract::{ExtractOptions, ListingExtractor};
use crate::fetch::PageFetcher;
use crate::models::input::InputItem;
use crate::models::record::PropertyRecord;
use crate::portal::detect_portal;

/// Routes URLs to the extractor and collects the records.
pub struct Scraper<F> {
    fetcher: F,
    extractor: ListingExtractor,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F, options: ExtractOptions) -> Self {
        Self {
            fetcher,
            extractor: ListingExtractor::new(options),
        }
    }

    /// Fetch and extract one URL.
    ///
    /// Never fails: unsupported portals and empty or unreachable pages are
    /// logged and produce zero records.
    pub async fn process_url(&self, url: &str, meta: &Map<String, Value>) -> Vec<PropertyRecord> {
        let Some(portal) = detect_portal(url) else {
            warn!("Unsupported portal for URL {}; skipping.", url);
            return Vec::new();
        };

        let html = self.fetcher.fetch(url).await;

        match self.extractor.extract(&html, url, portal) {
            Ok(mut records) => {
                if !meta.is_empty() {
                    for record in &mut records {
                        record.meta = Some(meta.clone());
                    }
                }
                info!("Processed {} records from {}", records.len(), url);
                records
            }
            Err(ExtractionError::EmptyDocument(_)) => {
                warn!("Empty HTML for {}", url);
                Vec::new()
            }
        }
    }

    /// Process every item in order, one at a time. `progress` is called after
    /// each item with the number of records it produced.
    pub async fn run<P>(&self, items: &[InputItem], mut progress: P) -> Vec<PropertyRecord>
    where
        P: FnMut(&InputItem, usize),
    {
        let mut records = Vec::new();

        for item in items {
            let found = self.process_url(&item.url, &item.meta).await;
            progress(item, found.len());
            records.extend(found);
        }

        records
    }
}
