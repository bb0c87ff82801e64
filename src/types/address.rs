use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{opt_text, Category, FieldValue, Record};

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A harvested postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressRecord {
    pub id: String,
    pub full_address: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub coordinates: Option<GeoPoint>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl AddressRecord {
    pub fn new(full_address: &str, source: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_address: full_address.to_string(),
            street: None,
            city: None,
            region: None,
            country: None,
            postal_code: None,
            coordinates: None,
            source: source.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for AddressRecord {
    const CATEGORY: Category = Category::Address;
    const EXPORT_FIELDS: &'static [&'static str] = &[
        "full_address", "street", "city", "region", "country", "postal_code", "coordinates",
    ];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["full_address"];
    const FILTER_FIELDS: &'static [&'static str] = &["country", "city"];

    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn payload_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "full_address" => Some(self.full_address.as_str().into()),
            "street" => opt_text(&self.street),
            "city" => opt_text(&self.city),
            "region" => opt_text(&self.region),
            "country" => opt_text(&self.country),
            "postal_code" => opt_text(&self.postal_code),
            // "lat,lng"
            "coordinates" => self
                .coordinates
                .map(|p| FieldValue::Text(format!("{},{}", p.lat, p.lng))),
            _ => None,
        }
    }
}
