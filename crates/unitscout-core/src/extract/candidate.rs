//! Primary candidate selection.

use super::jsonld::StructuredCandidate;

/// Schema.org types that describe a listed property or its offer.
pub const PREFERRED_TYPES: &[&str] = &[
    "Apartment",
    "Unit",
    "Product",
    "Offer",
    "SingleFamilyResidence",
    "House",
    "Residence",
    "RealEstateListing",
];

/// Pick the first candidate whose `@type` intersects `preferred`, falling
/// back to the first candidate. Returns `None` only for an empty slice.
pub fn select_candidate<'a>(
    candidates: &'a [StructuredCandidate],
    preferred: &[&str],
) -> Option<&'a StructuredCandidate> {
    candidates
        .iter()
        .find(|c| c.types().iter().any(|t| preferred.contains(t)))
        .or_else(|| candidates.first())
}
