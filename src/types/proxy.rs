use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{opt_text, Activatable, Category, FieldValue, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
    Http,
    Https,
    Socks4,
    Socks5,
}

impl ProxyProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyProtocol::Http => "http",
            ProxyProtocol::Https => "https",
            ProxyProtocol::Socks4 => "socks4",
            ProxyProtocol::Socks5 => "socks5",
        }
    }
}

/// Result of the last liveness check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProxyStatus {
    Working,
    Failed,
    Checking,
}

impl ProxyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyStatus::Working => "working",
            ProxyStatus::Failed => "failed",
            ProxyStatus::Checking => "checking",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Anonymity {
    Transparent,
    Anonymous,
    Elite,
}

impl Anonymity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anonymity::Transparent => "transparent",
            Anonymity::Anonymous => "anonymous",
            Anonymity::Elite => "elite",
        }
    }
}

/// Proxy login. The password is never printed by `Debug` and never exported
/// by the delimited or markup encoders.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ProxyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A configured proxy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyEndpoint {
    pub id: String,
    pub host: String,
    pub port: u16,
    pub credentials: Option<ProxyCredentials>,
    pub protocol: ProxyProtocol,
    pub is_active: bool,
    pub last_checked: DateTime<Utc>,
    pub status: ProxyStatus,
    pub response_time_ms: u32,
    pub country: Option<String>,
    pub anonymity: Anonymity,
    pub created_at: DateTime<Utc>,
}

impl ProxyEndpoint {
    /// Creates an active, not-yet-checked proxy.
    pub fn new(host: &str, port: u16, protocol: ProxyProtocol) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            host: host.to_string(),
            port,
            credentials: None,
            protocol,
            is_active: true,
            last_checked: now,
            status: ProxyStatus::Checking,
            response_time_ms: 0,
            country: None,
            anonymity: Anonymity::Anonymous,
            created_at: now,
        }
    }

    /// `protocol://host:port`
    pub fn address(&self) -> String {
        format!("{}://{}:{}", self.protocol.as_str(), self.host, self.port)
    }
}

impl Record for ProxyEndpoint {
    const CATEGORY: Category = Category::Proxy;
    const EXPORT_FIELDS: &'static [&'static str] = &[
        "host",
        "port",
        "credentials",
        "protocol",
        "is_active",
        "last_checked",
        "status",
        "response_time_ms",
        "country",
        "anonymity",
    ];
    const SEARCHABLE_FIELDS: &'static [&'static str] = &["host", "country"];
    const FILTER_FIELDS: &'static [&'static str] = &["protocol", "status", "is_active"];

    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &str {
        &self.host
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn payload_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "host" => Some(self.host.as_str().into()),
            "port" => Some(self.port.into()),
            "credentials" => self
                .credentials
                .as_ref()
                .map(|c| FieldValue::Text(c.username.clone())),
            "protocol" => Some(self.protocol.as_str().into()),
            "is_active" => Some(self.is_active.into()),
            "last_checked" => Some(self.last_checked.into()),
            "status" => Some(self.status.as_str().into()),
            "response_time_ms" => Some(self.response_time_ms.into()),
            "country" => opt_text(&self.country),
            "anonymity" => Some(self.anonymity.as_str().into()),
            _ => None,
        }
    }
}

impl Activatable for ProxyEndpoint {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}
