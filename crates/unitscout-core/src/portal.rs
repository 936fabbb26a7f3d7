//! Portal detection and per-portal extraction profiles.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::extract::cascade::{DEFAULT_CASCADE, FieldRule};
use crate::extract::candidate::PREFERRED_TYPES;

/// A supported listing portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    PropertyFinder,
    Bayut,
    Dubizzle,
}

/// Extraction configuration for one portal.
///
/// Adding a portal means adding a variant and a profile entry; the
/// extraction pipeline itself is shared.
#[derive(Debug)]
pub struct PortalProfile {
    /// Display label used in log lines.
    pub label: &'static str,
    /// Lowercase hostname fragment identifying the portal.
    pub host_fragment: &'static str,
    /// JSON-LD `@type` values preferred when picking the primary candidate.
    pub preferred_types: &'static [&'static str],
    /// Field-to-source cascade table.
    pub cascade: &'static [FieldRule],
}

static PROPERTYFINDER: PortalProfile = PortalProfile {
    label: "PropertyFinder",
    host_fragment: "propertyfinder",
    preferred_types: PREFERRED_TYPES,
    cascade: DEFAULT_CASCADE,
};

static BAYUT: PortalProfile = PortalProfile {
    label: "Bayut",
    host_fragment: "bayut",
    preferred_types: PREFERRED_TYPES,
    cascade: DEFAULT_CASCADE,
};

static DUBIZZLE: PortalProfile = PortalProfile {
    label: "Dubizzle",
    host_fragment: "dubizzle",
    preferred_types: PREFERRED_TYPES,
    cascade: DEFAULT_CASCADE,
};

impl Portal {
    pub const ALL: [Portal; 3] = [Portal::PropertyFinder, Portal::Bayut, Portal::Dubizzle];

    /// Lowercase key written to the `Portal` column.
    pub fn key(self) -> &'static str {
        self.profile().host_fragment
    }

    /// Extraction profile for this portal.
    pub fn profile(self) -> &'static PortalProfile {
        match self {
            Portal::PropertyFinder => &PROPERTYFINDER,
            Portal::Bayut => &BAYUT,
            Portal::Dubizzle => &DUBIZZLE,
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Classify a URL by its hostname. Returns `None` for unparseable URLs and
/// hosts that match no known portal.
pub fn detect_portal(url: &str) -> Option<Portal> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();

    Portal::ALL
        .into_iter()
        .find(|portal| host.contains(portal.profile().host_fragment))
}
