use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{Category, FieldValue, Record};

/// A harvested email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailRecord {
    pub id: String,
    pub address: String,
    pub domain: String,
    pub is_valid: bool,
    pub verified: bool,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl EmailRecord {
    /// Creates a record with a fresh ID; the domain is derived from the address.
    pub fn new(address: &str, source: &str, is_valid: bool, verified: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            address: address.to_string(),
            domain: domain_of(address),
            is_valid,
            verified,
            source: source.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Substring after the last `@`, or an empty string when there is none.
pub fn domain_of(address: &str) -> String {
    address
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_string())
        .unwrap_or_default()
}

impl Record for EmailRecord {
    const CATEGORY: Category = Category::Email;
    const EXPORT_FIELDS: &'static [&'static str] = &["address", "domain", "is_valid", "verified"];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["address"];
    const FILTER_FIELDS: &'static [&'static str] = &["domain", "is_valid"];

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
            "address" => Some(self.address.as_str().into()),
            "domain" => Some(self.domain.as_str().into()),
            "is_valid" => Some(self.is_valid.into()),
            "verified" => Some(self.verified.into()),
            _ => None,
        }
    }
}
