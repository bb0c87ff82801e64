use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{opt_text, Category, FieldValue, Record};

/// Payment card network.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Other,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "visa",
            CardNetwork::Mastercard => "mastercard",
            CardNetwork::Amex => "amex",
            CardNetwork::Discover => "discover",
            CardNetwork::Other => "other",
        }
    }
}

/// A harvested payment card. The number is stored already masked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    pub id: String,
    pub card_number: String,
    pub network: CardNetwork,
    pub expiry: Option<String>,
    pub holder_name: Option<String>,
    pub is_valid: bool,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl CardRecord {
    pub fn new(card_number: &str, network: CardNetwork, is_valid: bool, source: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            card_number: card_number.to_string(),
            network,
            expiry: None,
            holder_name: None,
            is_valid,
            source: source.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for CardRecord {
    const CATEGORY: Category = Category::PaymentCard;
    const EXPORT_FIELDS: &'static [&'static str] =
        &["card_number", "network", "expiry", "holder_name", "is_valid"];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["card_number", "holder_name"];
    const FILTER_FIELDS: &'static [&'static str] = &["network", "is_valid"];

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
            "card_number" => Some(self.card_number.as_str().into()),
            "network" => Some(self.network.as_str().into()),
            "expiry" => opt_text(&self.expiry),
            "holder_name" => opt_text(&self.holder_name),
            "is_valid" => Some(self.is_valid.into()),
            _ => None,
        }
    }
}
