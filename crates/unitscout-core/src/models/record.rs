//! Property record with a fixed, export-stable schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::portal::Portal;

/// One of the scalar fields resolved from a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AuthorityNameEn,
    AuthorityNameAr,
    PermitNumber,
    PermitEndDate,
    ListingNumber,
    RealEstateNumber,
    PropertyNameEn,
    ZoneNameEn,
    PropertyTypeNameEn,
    PropertyValue,
    RoomsCount,
    PropertySize,
    BuildingNameEn,
    UnitNumber,
    LicenseNumber,
    DeveloperNameEn,
    PermitTypeNameEn,
}

impl Field {
    /// All scalar fields in schema order.
    pub const ALL: [Field; 17] = [
        Field::AuthorityNameEn,
        Field::AuthorityNameAr,
        Field::PermitNumber,
        Field::PermitEndDate,
        Field::ListingNumber,
        Field::RealEstateNumber,
        Field::PropertyNameEn,
        Field::ZoneNameEn,
        Field::PropertyTypeNameEn,
        Field::PropertyValue,
        Field::RoomsCount,
        Field::PropertySize,
        Field::BuildingNameEn,
        Field::UnitNumber,
        Field::LicenseNumber,
        Field::DeveloperNameEn,
        Field::PermitTypeNameEn,
    ];

    /// Column name used in every export format.
    pub fn name(self) -> &'static str {
        match self {
            Field::AuthorityNameEn => "AuthorityNameEn",
            Field::AuthorityNameAr => "AuthorityNameAr",
            Field::PermitNumber => "PermitNumber",
            Field::PermitEndDate => "PermitEndDate",
            Field::ListingNumber => "ListingNumber",
            Field::RealEstateNumber => "RealEstateNumber",
            Field::PropertyNameEn => "PropertyNameEn",
            Field::ZoneNameEn => "ZoneNameEn",
            Field::PropertyTypeNameEn => "PropertyTypeNameEn",
            Field::PropertyValue => "PropertyValue",
            Field::RoomsCount => "RoomsCount",
            Field::PropertySize => "PropertySize",
            Field::BuildingNameEn => "BuildingNameEn",
            Field::UnitNumber => "UnitNumber",
            Field::LicenseNumber => "LicenseNumber",
            Field::DeveloperNameEn => "DeveloperNameEn",
            Field::PermitTypeNameEn => "PermitTypeNameEn",
        }
    }
}

/// A single extracted listing.
///
/// Every key is always serialized; unresolved fields are `null`. Scalar
/// values keep whatever JSON type the page carried (a price may be a number,
/// a `@type` may be an array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyRecord {
    pub authority_name_en: Option<Value>,
    pub authority_name_ar: Option<Value>,
    pub permit_number: Option<Value>,
    pub permit_end_date: Option<Value>,
    pub listing_number: Option<Value>,
    pub real_estate_number: Option<Value>,
    pub property_name_en: Option<Value>,
    pub zone_name_en: Option<Value>,
    pub property_type_name_en: Option<Value>,
    pub property_value: Option<Value>,
    pub rooms_count: Option<Value>,
    pub property_size: Option<Value>,
    pub building_name_en: Option<Value>,
    pub unit_number: Option<Value>,
    pub license_number: Option<Value>,
    pub developer_name_en: Option<Value>,
    pub permit_type_name_en: Option<Value>,

    /// `tel:` targets, sorted and deduplicated. Only filled when contact
    /// retrieval is enabled.
    pub owner_phones: Option<Vec<String>>,

    /// `mailto:` targets, sorted and deduplicated.
    pub owner_emails: Option<Vec<String>>,

    #[serde(rename = "SourceURL")]
    pub source_url: String,

    pub portal: Portal,

    /// Extra keys from the input item, carried verbatim.
    pub meta: Option<Map<String, Value>>,
}

impl PropertyRecord {
    /// Column names in schema order.
    pub const COLUMNS: [&'static str; 22] = [
        "AuthorityNameEn",
        "AuthorityNameAr",
        "PermitNumber",
        "PermitEndDate",
        "ListingNumber",
        "RealEstateNumber",
        "PropertyNameEn",
        "ZoneNameEn",
        "PropertyTypeNameEn",
        "PropertyValue",
        "RoomsCount",
        "PropertySize",
        "BuildingNameEn",
        "UnitNumber",
        "LicenseNumber",
        "DeveloperNameEn",
        "PermitTypeNameEn",
        "OwnerPhones",
        "OwnerEmails",
        "SourceURL",
        "Portal",
        "Meta",
    ];

    /// Create an empty record for a URL.
    pub fn new(source_url: impl Into<String>, portal: Portal) -> Self {
        Self {
            authority_name_en: None,
            authority_name_ar: None,
            permit_number: None,
            permit_end_date: None,
            listing_number: None,
            real_estate_number: None,
            property_name_en: None,
            zone_name_en: None,
            property_type_name_en: None,
            property_value: None,
            rooms_count: None,
            property_size: None,
            building_name_en: None,
            unit_number: None,
            license_number: None,
            developer_name_en: None,
            permit_type_name_en: None,
            owner_phones: None,
            owner_emails: None,
            source_url: source_url.into(),
            portal,
            meta: None,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<Value> {
        match field {
            Field::AuthorityNameEn => &mut self.authority_name_en,
            Field::AuthorityNameAr => &mut self.authority_name_ar,
            Field::PermitNumber => &mut self.permit_number,
            Field::PermitEndDate => &mut self.permit_end_date,
            Field::ListingNumber => &mut self.listing_number,
            Field::RealEstateNumber => &mut self.real_estate_number,
            Field::PropertyNameEn => &mut self.property_name_en,
            Field::ZoneNameEn => &mut self.zone_name_en,
            Field::PropertyTypeNameEn => &mut self.property_type_name_en,
            Field::PropertyValue => &mut self.property_value,
            Field::RoomsCount => &mut self.rooms_count,
            Field::PropertySize => &mut self.property_size,
            Field::BuildingNameEn => &mut self.building_name_en,
            Field::UnitNumber => &mut self.unit_number,
            Field::LicenseNumber => &mut self.license_number,
            Field::DeveloperNameEn => &mut self.developer_name_en,
            Field::PermitTypeNameEn => &mut self.permit_type_name_en,
        }
    }

    /// Get a scalar field.
    pub fn get(&self, field: Field) -> Option<&Value> {
        match field {
            Field::AuthorityNameEn => self.authority_name_en.as_ref(),
            Field::AuthorityNameAr => self.authority_name_ar.as_ref(),
            Field::PermitNumber => self.permit_number.as_ref(),
            Field::PermitEndDate => self.permit_end_date.as_ref(),
            Field::ListingNumber => self.listing_number.as_ref(),
            Field::RealEstateNumber => self.real_estate_number.as_ref(),
            Field::PropertyNameEn => self.property_name_en.as_ref(),
            Field::ZoneNameEn => self.zone_name_en.as_ref(),
            Field::PropertyTypeNameEn => self.property_type_name_en.as_ref(),
            Field::PropertyValue => self.property_value.as_ref(),
            Field::RoomsCount => self.rooms_count.as_ref(),
            Field::PropertySize => self.property_size.as_ref(),
            Field::BuildingNameEn => self.building_name_en.as_ref(),
            Field::UnitNumber => self.unit_number.as_ref(),
            Field::LicenseNumber => self.license_number.as_ref(),
            Field::DeveloperNameEn => self.developer_name_en.as_ref(),
            Field::PermitTypeNameEn => self.permit_type_name_en.as_ref(),
        }
    }

    /// Set a scalar field.
    pub fn set(&mut self, field: Field, value: Option<Value>) {
        *self.slot_mut(field) = value;
    }

    /// Flatten the record into `(column, value)` pairs in schema order.
    pub fn to_row(&self) -> Vec<(&'static str, Value)> {
        let mut row: Vec<(&'static str, Value)> = Field::ALL
            .iter()
            .map(|f| (f.name(), self.get(*f).cloned().unwrap_or(Value::Null)))
            .collect();

        let strings = |v: &Option<Vec<String>>| {
            v.as_ref()
                .map(|items| Value::Array(items.iter().cloned().map(Value::String).collect()))
                .unwrap_or(Value::Null)
        };

        row.push(("OwnerPhones", strings(&self.owner_phones)));
        row.push(("OwnerEmails", strings(&self.owner_emails)));
        row.push(("SourceURL", Value::String(self.source_url.clone())));
        row.push(("Portal", Value::String(self.portal.key().to_string())));
        row.push((
            "Meta",
            self.meta.clone().map(Value::Object).unwrap_or(Value::Null),
        ));

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_every_key_serialized() {
        let record = PropertyRecord::new("https://www.bayut.com/x", Portal::Bayut);
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), PropertyRecord::COLUMNS.len());
        for column in PropertyRecord::COLUMNS {
            assert!(obj.contains_key(column), "missing {column}");
        }
        assert_eq!(obj["SourceURL"], json!("https://www.bayut.com/x"));
        assert_eq!(obj["Portal"], json!("bayut"));
        assert_eq!(obj["UnitNumber"], Value::Null);
    }

    #[test]
    fn test_json_round_trip_keeps_nulls_and_types() {
        let mut record = PropertyRecord::new("https://www.propertyfinder.ae/en/plp/1", Portal::PropertyFinder);
        record.set(Field::PropertyValue, Some(json!(1_250_000)));
        record.set(Field::PropertyTypeNameEn, Some(json!(["Apartment", "Product"])));
        record.set(Field::UnitNumber, Some(json!("908")));
        record.owner_emails = Some(vec!["B@x.com".into(), "a@x.com".into()]);
        record.meta = Some(json!({"campaign": "q3"}).as_object().unwrap().clone());

        let text = serde_json::to_string_pretty(&vec![record.clone()]).unwrap();
        let back: Vec<PropertyRecord> = serde_json::from_str(&text).unwrap();

        assert_eq!(back, vec![record]);
    }

    #[test]
    fn test_row_follows_column_order() {
        let record = PropertyRecord::new("https://dubai.dubizzle.com/p/1", Portal::Dubizzle);
        let names: Vec<&str> = record.to_row().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, PropertyRecord::COLUMNS.to_vec());
    }
}
