use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{opt_text, Category, FieldValue, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Driver,
    Business,
    Professional,
    Other,
}

impl LicenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Driver => "driver",
            LicenseType::Business => "business",
            LicenseType::Professional => "professional",
            LicenseType::Other => "other",
        }
    }
}

/// A harvested license document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LicenseRecord {
    pub id: String,
    pub license_number: String,
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    pub issuer: Option<String>,
    pub expiry: Option<DateTime<Utc>>,
    pub holder_name: Option<String>,
    pub region: Option<String>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl LicenseRecord {
    pub fn new(license_number: &str, license_type: LicenseType, source: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            license_number: license_number.to_string(),
            license_type,
            issuer: None,
            expiry: None,
            holder_name: None,
            region: None,
            source: source.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Expiry is informational; nothing removes an expired license.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry.map(|e| e < now).unwrap_or(false)
    }
}

impl Record for LicenseRecord {
    const CATEGORY: Category = Category::License;
    const EXPORT_FIELDS: &'static [&'static str] =
        &["license_number", "type", "issuer", "expiry", "holder_name", "region"];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["license_number", "holder_name"];
    const FILTER_FIELDS: &'static [&'static str] = &["type", "region"];

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
            "license_number" => Some(self.license_number.as_str().into()),
            "type" => Some(self.license_type.as_str().into()),
            "issuer" => opt_text(&self.issuer),
            "expiry" => self.expiry.map(FieldValue::Timestamp),
            "holder_name" => opt_text(&self.holder_name),
            "region" => opt_text(&self.region),
            _ => None,
        }
    }
}
