use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{Category, FieldValue, Record};

/// Outcome of parsing one page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    Success,
    Partial,
    Failed,
}

impl ParseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStatus::Success => "success",
            ParseStatus::Partial => "partial",
            ParseStatus::Failed => "failed",
        }
    }
}

/// Data extracted from one page of a configured site.
///
/// `data` is keyed by extracted field name; a `BTreeMap` keeps its
/// serialization order stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedPageResult {
    pub id: String,
    pub site_id: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub data: BTreeMap<String, serde_json::Value>,
    pub status: ParseStatus,
    pub errors: Option<Vec<String>>,
    pub processing_time_ms: u32,
}

impl ParsedPageResult {
    pub fn new(
        site_id: &str,
        url: &str,
        data: BTreeMap<String, serde_json::Value>,
        status: ParseStatus,
        processing_time_ms: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            site_id: site_id.to_string(),
            url: url.to_string(),
            timestamp: Utc::now(),
            data,
            status,
            errors: None,
            processing_time_ms,
        }
    }
}

impl Record for ParsedPageResult {
    const CATEGORY: Category = Category::ParsedPageResult;
    const EXPORT_FIELDS: &'static [&'static str] = &[
        "site_id",
        "url",
        "timestamp",
        "data",
        "status",
        "errors",
        "processing_time_ms",
    ];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["url", "data"];
    const FILTER_FIELDS: &'static [&'static str] = &["site_id", "status"];

    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &str {
        &self.site_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn payload_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "site_id" => Some(self.site_id.as_str().into()),
            "url" => Some(self.url.as_str().into()),
            "timestamp" => Some(self.timestamp.into()),
            // Compact JSON text, which is also what free-text search scans.
            "data" => serde_json::to_string(&self.data).ok().map(FieldValue::Text),
            "status" => Some(self.status.as_str().into()),
            "errors" => self.errors.as_ref().map(|e| FieldValue::Text(e.join("; "))),
            "processing_time_ms" => Some(self.processing_time_ms.into()),
            _ => None,
        }
    }
}
