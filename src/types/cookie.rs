use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{Category, FieldValue, Record};

/// Cookie `SameSite` policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "strict",
            SameSite::Lax => "lax",
            SameSite::None => "none",
        }
    }
}

/// A harvested browser cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CookieRecord {
    pub id: String,
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub expires: Option<DateTime<Utc>>,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl CookieRecord {
    /// Creates a session cookie on path `/` with `Lax` policy.
    pub fn new(name: &str, value: &str, domain: &str, source: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            value: value.to_string(),
            domain: domain.to_string(),
            path: "/".to_string(),
            expires: None,
            http_only: false,
            secure: false,
            same_site: SameSite::Lax,
            source: source.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for CookieRecord {
    const CATEGORY: Category = Category::Cookie;
    const EXPORT_FIELDS: &'static [&'static str] = &[
        "name", "value", "domain", "path", "expires", "http_only", "secure", "same_site",
    ];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["name", "value"];
    const FILTER_FIELDS: &'static [&'static str] = &["domain", "secure"];

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
            "name" => Some(self.name.as_str().into()),
            "value" => Some(self.value.as_str().into()),
            "domain" => Some(self.domain.as_str().into()),
            "path" => Some(self.path.as_str().into()),
            "expires" => self.expires.map(FieldValue::Timestamp),
            "http_only" => Some(self.http_only.into()),
            "secure" => Some(self.secure.into()),
            "same_site" => Some(self.same_site.as_str().into()),
            _ => None,
        }
    }
}
