use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{opt_text, Category, FieldValue, Record};

/// Line type of a phone number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Mobile,
    Landline,
    Voip,
}

impl PhoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::Mobile => "mobile",
            PhoneType::Landline => "landline",
            PhoneType::Voip => "voip",
        }
    }
}

/// A harvested phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneRecord {
    pub id: String,
    pub number: String,
    pub country: String,
    pub region: Option<String>,
    pub carrier: Option<String>,
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
    pub is_valid: bool,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl PhoneRecord {
    pub fn new(number: &str, country: &str, phone_type: PhoneType, is_valid: bool, source: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            number: number.to_string(),
            country: country.to_string(),
            region: None,
            carrier: None,
            phone_type,
            is_valid,
            source: source.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for PhoneRecord {
    const CATEGORY: Category = Category::Phone;
    const EXPORT_FIELDS: &'static [&'static str] =
        &["number", "country", "region", "carrier", "type", "is_valid"];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["number"];
    const FILTER_FIELDS: &'static [&'static str] = &["country", "type"];

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
            "number" => Some(self.number.as_str().into()),
            "country" => Some(self.country.as_str().into()),
            "region" => opt_text(&self.region),
            "carrier" => opt_text(&self.carrier),
            "type" => Some(self.phone_type.as_str().into()),
            "is_valid" => Some(self.is_valid.into()),
            _ => None,
        }
    }
}
