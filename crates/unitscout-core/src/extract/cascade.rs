//! Field cascades: ordered source lists resolved first-non-empty-wins.

use std::cell::OnceCell;

use serde_json::Value;

use super::document::ListingPage;
use super::jsonld::StructuredCandidate;
use super::patterns::{UNIT_TEXT_LIMIT, infer_unit_number};
use crate::models::record::{Field, PropertyRecord};

use Source::{Breadcrumb, Key, Nested, Title, UnitText};

/// A place a field value can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Top-level key of the primary candidate.
    Key(&'static str),
    /// Key inside an object-valued key of the primary candidate,
    /// e.g. `offers.price`.
    Nested(&'static str, &'static str),
    /// Text of the page `<title>`.
    Title,
    /// Last entry of the breadcrumb navigation.
    Breadcrumb,
    /// Unit number inferred from the page's visible text.
    UnitText,
}

/// Ordered sources for one output field.
#[derive(Debug)]
pub struct FieldRule {
    pub field: Field,
    pub sources: &'static [Source],
}

const fn rule(field: Field, sources: &'static [Source]) -> FieldRule {
    FieldRule { field, sources }
}

/// Cascade shared by all supported portals.
pub const DEFAULT_CASCADE: &[FieldRule] = &[
    rule(Field::AuthorityNameEn, &[Nested("seller", "name"), Nested("broker", "name")]),
    rule(Field::AuthorityNameAr, &[]),
    rule(Field::PermitNumber, &[]),
    rule(Field::PermitEndDate, &[]),
    rule(Field::ListingNumber, &[Key("sku"), Key("listingId"), Key("identifier")]),
    rule(Field::RealEstateNumber, &[]),
    rule(Field::PropertyNameEn, &[Key("name"), Key("headline"), Title]),
    rule(
        Field::ZoneNameEn,
        &[Nested("address", "addressLocality"), Nested("address", "streetAddress")],
    ),
    rule(Field::PropertyTypeNameEn, &[Key("@type"), Key("propertyType"), Breadcrumb]),
    rule(Field::PropertyValue, &[Nested("offers", "price"), Key("price")]),
    rule(Field::RoomsCount, &[Key("numberOfRooms"), Key("rooms")]),
    rule(Field::PropertySize, &[Nested("floorSize", "value"), Key("area")]),
    rule(Field::BuildingNameEn, &[Key("buildingName"), Key("project"), Key("name")]),
    rule(Field::UnitNumber, &[UnitText]),
    rule(Field::LicenseNumber, &[]),
    rule(Field::DeveloperNameEn, &[Nested("developer", "name")]),
    rule(Field::PermitTypeNameEn, &[Key("category"), Key("availability")]),
];

/// Values that can be "present but empty".
pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// First attempt that yields a non-empty value. Attempts are pulled lazily,
/// so sources after the winner are never evaluated.
pub fn first_non_empty<T, I>(attempts: I) -> Option<T>
where
    T: Emptiness,
    I: IntoIterator<Item = Option<T>>,
{
    attempts
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty_value())
}

/// Everything a source may read from while resolving one page.
pub struct ResolveContext<'a> {
    candidate: Option<&'a StructuredCandidate>,
    page: &'a ListingPage,
    text: OnceCell<String>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(candidate: Option<&'a StructuredCandidate>, page: &'a ListingPage) -> Self {
        Self {
            candidate,
            page,
            text: OnceCell::new(),
        }
    }

    fn visible_text(&self) -> &str {
        self.text.get_or_init(|| self.page.visible_text(UNIT_TEXT_LIMIT))
    }

    /// Evaluate a single source.
    pub fn lookup(&self, source: Source) -> Option<Value> {
        match source {
            Source::Key(key) => self.candidate?.get(key).cloned(),
            Source::Nested(parent, key) => self.candidate?.nested(parent, key).cloned(),
            Source::Title => self.page.title().map(Value::String),
            Source::Breadcrumb => self.page.breadcrumb_tail().map(Value::String),
            Source::UnitText => infer_unit_number(self.visible_text()).map(Value::String),
        }
    }

    /// Resolve one rule.
    pub fn resolve(&self, rule: &FieldRule) -> Option<Value> {
        first_non_empty(rule.sources.iter().map(|source| self.lookup(*source)))
    }
}

/// Fill every field named in `rules` on `record`.
pub fn resolve_fields(
    rules: &[FieldRule],
    candidate: Option<&StructuredCandidate>,
    page: &ListingPage,
    record: &mut PropertyRecord,
) {
    let ctx = ResolveContext::new(candidate, page);
    for rule in rules {
        record.set(rule.field, ctx.resolve(rule));
    }
}
