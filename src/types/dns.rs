use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{opt_text, Activatable, Category, FieldValue, Record};

/// A configured DNS resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DnsEntry {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub secondary: Option<String>,
    pub is_active: bool,
    pub response_time_ms: u32,
    /// Percentage, 0–100.
    pub reliability: u32,
    pub provider: String,
    pub created_at: DateTime<Utc>,
}

impl DnsEntry {
    pub fn new(name: &str, primary: &str, secondary: Option<&str>, provider: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.map(|s| s.to_string()),
            is_active: true,
            response_time_ms: 0,
            reliability: 0,
            provider: provider.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for DnsEntry {
    const CATEGORY: Category = Category::DnsEntry;
    const EXPORT_FIELDS: &'static [&'static str] = &[
        "name",
        "primary",
        "secondary",
        "is_active",
        "response_time_ms",
        "reliability",
        "provider",
    ];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["name", "primary", "provider"];
    const FILTER_FIELDS: &'static [&'static str] = &["provider", "is_active"];

    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &str {
        &self.provider
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn payload_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "primary" => Some(self.primary.as_str().into()),
            "secondary" => opt_text(&self.secondary),
            "is_active" => Some(self.is_active.into()),
            "response_time_ms" => Some(self.response_time_ms.into()),
            "reliability" => Some(self.reliability.into()),
            "provider" => Some(self.provider.as_str().into()),
            _ => None,
        }
    }
}

impl Activatable for DnsEntry {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}
