use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ExportError;

/// Output encoding for an export.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    /// Comma-separated values.
    Delimited,
    /// XML.
    Markup,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Delimited => "csv",
            ExportFormat::Markup => "xml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Delimited => "text/csv",
            ExportFormat::Markup => "application/xml",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" | "delimited" => Ok(ExportFormat::Delimited),
            "xml" | "markup" => Ok(ExportFormat::Markup),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serialized export ready to be handed to a download/save mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub content: String,
    pub filename: String,
    pub mime_type: &'static str,
}

impl ExportPayload {
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}
