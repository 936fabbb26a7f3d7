//! Core library for real-estate listing extraction.
//!
//! This crate provides:
//! - Portal detection by hostname (PropertyFinder, Bayut, Dubizzle)
//! - JSON-LD candidate extraction and selection
//! - Per-field cascade resolution into a fixed-schema property record
//! - Unit-number inference from free text and optional contact scraping
//! - A sequential batch pipeline with per-URL failure isolation

pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod portal;

pub use error::{ExtractionError, Result, ScrapeError};
pub use extract::{ExtractOptions, ListingExtractor, ListingPage, StructuredCandidate};
pub use fetch::{HttpFetcher, PageFetcher};
pub use models::config::Settings;
pub use models::input::{InputItem, normalize_input};
pub use models::record::{Field, PropertyRecord};
pub use pipeline::Scraper;
pub use portal::{Portal, detect_portal};
