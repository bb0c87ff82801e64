use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{opt_text, Category, FieldValue, Record};

/// What an auth credential holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthKind {
    Login,
    Password,
    Token,
}

impl AuthKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthKind::Login => "login",
            AuthKind::Password => "password",
            AuthKind::Token => "token",
        }
    }
}

/// Estimated password strength.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

/// A harvested login, password or token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthRecord {
    pub id: String,
    pub kind: AuthKind,
    pub value: String,
    pub username: Option<String>,
    pub domain: String,
    pub is_hashed: bool,
    pub strength: Option<Strength>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl AuthRecord {
    pub fn new(kind: AuthKind, value: &str, domain: &str, source: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            value: value.to_string(),
            username: None,
            domain: domain.to_string(),
            is_hashed: false,
            strength: None,
            source: source.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for AuthRecord {
    const CATEGORY: Category = Category::AuthCredential;
    const EXPORT_FIELDS: &'static [&'static str] =
        &["kind", "value", "username", "domain", "is_hashed", "strength"];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["value", "username"];
    const FILTER_FIELDS: &'static [&'static str] = &["kind", "domain"];

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
            "kind" => Some(self.kind.as_str().into()),
            "value" => Some(self.value.as_str().into()),
            "username" => opt_text(&self.username),
            "domain" => Some(self.domain.as_str().into()),
            "is_hashed" => Some(self.is_hashed.into()),
            "strength" => self.strength.map(|s| s.as_str().into()),
            _ => None,
        }
    }
}
