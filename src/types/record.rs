use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The fixed kind of a record, determining its field schema.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Email,
    Cookie,
    Phone,
    AuthCredential,
    Address,
    PaymentCard,
    License,
    Proxy,
    DnsEntry,
    ParsedPageResult,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Email,
        Category::Cookie,
        Category::Phone,
        Category::AuthCredential,
        Category::Address,
        Category::PaymentCard,
        Category::License,
        Category::Proxy,
        Category::DnsEntry,
        Category::ParsedPageResult,
    ];

    /// Harvested-data categories shown on the cross-category dashboard.
    pub const HARVESTED: [Category; 7] = [
        Category::Email,
        Category::Cookie,
        Category::Phone,
        Category::AuthCredential,
        Category::Address,
        Category::PaymentCard,
        Category::License,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Cookie => "cookie",
            Category::Phone => "phone",
            Category::AuthCredential => "auth_credential",
            Category::Address => "address",
            Category::PaymentCard => "payment_card",
            Category::License => "license",
            Category::Proxy => "proxy",
            Category::DnsEntry => "dns_entry",
            Category::ParsedPageResult => "parsed_page_result",
        }
    }

    /// Name of a whole collection of this category; used for export
    /// filenames and the markup root element.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Category::Email => "emails",
            Category::Cookie => "cookies",
            Category::Phone => "phones",
            Category::AuthCredential => "auth_credentials",
            Category::Address => "addresses",
            Category::PaymentCard => "payment_cards",
            Category::License => "licenses",
            Category::Proxy => "proxies",
            Category::DnsEntry => "dns_entries",
            Category::ParsedPageResult => "parsed_data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value read from a record field.
///
/// Used for equality constraints, free-text search and the delimited and
/// markup encoders.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Returns `true` for an empty text value, which acts as a wildcard
    /// when used as a constraint.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    /// Exact comparison against an expected constraint value.
    ///
    /// Values of the same variant compare directly. Mixed variants compare
    /// by their rendered text, so a `"true"` picked in a dropdown matches a
    /// boolean field.
    pub fn matches(&self, expected: &FieldValue) -> bool {
        match (self, expected) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a == b,
            (a, b) => a.to_string() == b.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Timestamp(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<u16> for FieldValue {
    fn from(i: u16) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

/// Common shape of every category record.
///
/// Each implementor declares its fixed field lists; the query engine, the
/// aggregator and the export serializer are driven entirely by them.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    const CATEGORY: Category;
    /// Field names written by the delimited and markup encoders, in order.
    const EXPORT_FIELDS: &'static [&'static str];
    /// Fields eligible for free-text substring matching.
    const SEARCHABLE_FIELDS: &'static [&'static str];
    /// Fields offered as equality filters.
    const FILTER_FIELDS: &'static [&'static str];

    fn id(&self) -> &str;
    fn source(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;

    /// Reads a category-specific field. Unset optional fields and unknown
    /// names yield `None`.
    fn payload_field(&self, name: &str) -> Option<FieldValue>;
}

/// Records with an on/off switch (proxies, DNS servers).
pub trait Activatable {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Field access used by the query engine, for both single-category records
/// and the mixed [`AnyRecord`](super::any::AnyRecord) wrapper.
pub trait Searchable {
    fn field(&self, name: &str) -> Option<FieldValue>;
    fn searchable_fields(&self) -> &'static [&'static str];
}

impl<T: Record> Searchable for T {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id().to_string())),
            "source" => Some(FieldValue::Text(self.source().to_string())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at())),
            _ => self.payload_field(name),
        }
    }

    fn searchable_fields(&self) -> &'static [&'static str] {
        T::SEARCHABLE_FIELDS
    }
}

/// Wraps an optional string into a text field value.
pub(crate) fn opt_text(value: &Option<String>) -> Option<FieldValue> {
    value.as_ref().map(|s| FieldValue::Text(s.clone()))
}
