use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of value a parsing rule extracts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleDataType {
    Text,
    Link,
    Image,
    Email,
    Phone,
    Price,
    Date,
}

/// A CSS-selector extraction rule. Selectors are stored, never evaluated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsingRule {
    pub id: String,
    pub name: String,
    pub selector: String,
    pub attribute: Option<String>,
    pub regex: Option<String>,
    pub is_enabled: bool,
    pub data_type: RuleDataType,
    pub required: bool,
    pub description: String,
}

impl ParsingRule {
    /// Creates an enabled, optional rule.
    pub fn new(name: &str, selector: &str, data_type: RuleDataType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            selector: selector.to_string(),
            attribute: None,
            regex: None,
            is_enabled: true,
            data_type,
            required: false,
            description: String::new(),
        }
    }
}

/// Login material used when scraping a site behind authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SiteAuth {
    pub email: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub tokens: BTreeMap<String, String>,
}

/// A scraping target and its extraction rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub id: String,
    pub url: String,
    pub name: String,
    pub is_active: bool,
    pub parsing_rules: Vec<ParsingRule>,
    pub auth: Option<SiteAuth>,
    pub custom_headers: BTreeMap<String, String>,
    pub delay_ms: u64,
    pub retry_count: u32,
    pub timeout_ms: u64,
    pub follow_redirects: bool,
    pub validate_ssl: bool,
}

impl SiteConfig {
    /// Creates an active site with no rules: 1 s delay, 3 retries, 30 s
    /// timeout, redirects followed and TLS validated.
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            name: name.to_string(),
            is_active: true,
            parsing_rules: Vec::new(),
            auth: None,
            custom_headers: BTreeMap::new(),
            delay_ms: 1000,
            retry_count: 3,
            timeout_ms: 30_000,
            follow_redirects: true,
            validate_ssl: true,
        }
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = &ParsingRule> {
        self.parsing_rules.iter().filter(|r| r.is_enabled)
    }
}

/// Partial update of a site; `None` leaves a value untouched.
#[derive(Debug, Clone, Default)]
pub struct SiteUpdate {
    pub url: Option<String>,
    pub name: Option<String>,
    pub custom_headers: Option<BTreeMap<String, String>>,
    pub auth: Option<SiteAuth>,
    pub delay_ms: Option<u64>,
    pub retry_count: Option<u32>,
    pub timeout_ms: Option<u64>,
    pub follow_redirects: Option<bool>,
    pub validate_ssl: Option<bool>,
}
