//! Listing extraction: one HTML page in, property records out.

pub mod candidate;
pub mod cascade;
pub mod contacts;
mod document;
pub mod jsonld;
pub mod patterns;

pub use candidate::select_candidate;
pub use cascade::{Emptiness, FieldRule, Source, first_non_empty, resolve_fields};
pub use contacts::{ContactDetails, extract_contacts};
pub use document::ListingPage;
pub use jsonld::{StructuredCandidate, extract_candidates};
pub use patterns::infer_unit_number;

use tracing::debug;

use crate::error::ExtractionError;
use crate::models::record::PropertyRecord;
use crate::portal::Portal;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Switches that change what is extracted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Scan `tel:` / `mailto:` links. When off the scan is skipped entirely.
    pub retrieve_contact_details: bool,
}

/// Portal-agnostic extractor driven by each portal's profile.
#[derive(Debug, Clone, Default)]
pub struct ListingExtractor {
    options: ExtractOptions,
}

impl ListingExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Set contact retrieval.
    pub fn with_contact_details(mut self, retrieve: bool) -> Self {
        self.options.retrieve_contact_details = retrieve;
        self
    }

    /// Extract records from a fetched page.
    ///
    /// Always yields exactly one record for a non-empty document, even when
    /// several JSON-LD objects describe different units.
    pub fn extract(&self, html: &str, url: &str, portal: Portal) -> Result<Vec<PropertyRecord>> {
        if html.is_empty() {
            return Err(ExtractionError::EmptyDocument(url.to_string()));
        }

        let profile = portal.profile();
        let page = ListingPage::parse(html);

        let candidates = extract_candidates(&page);
        let primary = select_candidate(&candidates, profile.preferred_types);
        debug!(
            "{}: {} JSON-LD candidates, primary type {:?}",
            profile.label,
            candidates.len(),
            primary.map(|c| c.types())
        );

        let mut record = PropertyRecord::new(url, portal);
        resolve_fields(profile.cascade, primary, &page, &mut record);

        if self.options.retrieve_contact_details {
            let contacts = extract_contacts(&page);
            record.owner_phones = contacts.phones;
            record.owner_emails = contacts.emails;
        }

        Ok(vec![record])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const LISTING: &str = r#"<!DOCTYPE html>
        <html><head>
          <title>2 BR | Marina Gate 1 | PropertyFinder</title>
          <script type="application/ld+json">
            {"@context": "https://schema.org", "@type": "BreadcrumbList", "name": "crumbs"}
          </script>
          <script type="application/ld+json">
            [{"@type": "Organization", "name": "Portal Inc"},
             {"@type": ["Apartment", "Product"], "name": "Marina Gate 1",
              "offers": {"price": 2400000}, "numberOfRooms": 2}]
          </script>
        </head><body>
          <h1>Marina Gate 1</h1>
          <p>Vacant Unit 908 on a high floor.</p>
          <a href="mailto:a@x.com">a</a> <a href="mailto:B@x.com">b</a>
          <a href="tel:+97140000000">call</a>
        </body></html>"#;

    const URL: &str = "https://www.propertyfinder.ae/en/plp/buy/apartment-1.html";

    #[test]
    fn test_extract_listing() {
        let records = ListingExtractor::default()
            .extract(LISTING, URL, Portal::PropertyFinder)
            .unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.source_url, URL);
        assert_eq!(record.portal, Portal::PropertyFinder);
        assert_eq!(record.property_name_en, Some(json!("Marina Gate 1")));
        assert_eq!(record.property_type_name_en, Some(json!(["Apartment", "Product"])));
        assert_eq!(record.property_value, Some(json!(2400000)));
        assert_eq!(record.rooms_count, Some(json!(2)));
        assert_eq!(record.unit_number, Some(json!("908")));
    }

    #[test]
    fn test_contacts_skipped_when_disabled() {
        let records = ListingExtractor::default()
            .extract(LISTING, URL, Portal::PropertyFinder)
            .unwrap();
        assert_eq!(records[0].owner_phones, None);
        assert_eq!(records[0].owner_emails, None);
    }

    #[test]
    fn test_contacts_when_enabled() {
        let records = ListingExtractor::default()
            .with_contact_details(true)
            .extract(LISTING, URL, Portal::PropertyFinder)
            .unwrap();
        assert_eq!(
            records[0].owner_emails,
            Some(vec!["B@x.com".to_string(), "a@x.com".to_string()])
        );
        assert_eq!(records[0].owner_phones, Some(vec!["+97140000000".to_string()]));
    }

    #[test]
    fn test_page_without_linked_data() {
        let records = ListingExtractor::default()
            .extract("<title>Listing 55</title><p>Apt 12</p>", URL, Portal::Bayut)
            .unwrap();
        assert_eq!(records[0].property_name_en, Some(json!("Listing 55")));
        assert_eq!(records[0].unit_number, Some(json!("12")));
        assert_eq!(records[0].property_value, None);
    }

    #[test]
    fn test_empty_document() {
        let err = ListingExtractor::default()
            .extract("", URL, Portal::Dubizzle)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyDocument(_)));
    }
}
