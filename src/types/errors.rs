use std::fmt;

// === StoreError ===

/// Errors related to record store operations.
#[derive(Debug, PartialEq)]
pub enum StoreError {
    /// Record with the given ID was not found.
    NotFound(String),
    /// A record with the given ID already exists.
    DuplicateId(String),
    /// An update tried to change the record's ID.
    IdChanged(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Record not found: {}", id),
            StoreError::DuplicateId(id) => write!(f, "Record already exists: {}", id),
            StoreError::IdChanged(id) => write!(f, "Record ID cannot be changed: {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

// === SiteError ===

/// Errors related to site configuration management.
#[derive(Debug, PartialEq)]
pub enum SiteError {
    /// Site with the given ID was not found.
    NotFound(String),
    /// Parsing rule with the given ID was not found.
    RuleNotFound(String),
    /// The site URL is not an http(s) URL.
    InvalidUrl(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::NotFound(id) => write!(f, "Site not found: {}", id),
            SiteError::RuleNotFound(id) => write!(f, "Parsing rule not found: {}", id),
            SiteError::InvalidUrl(url) => write!(f, "Invalid site URL: {}", url),
        }
    }
}

impl std::error::Error for SiteError {}

// === AssistantError ===

/// Errors related to AI assistant configuration.
#[derive(Debug, PartialEq)]
pub enum AssistantError {
    /// Assistant with the given ID was not found.
    NotFound(String),
    /// The provider needs an API key and none was given.
    MissingApiKey(String),
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::NotFound(id) => write!(f, "Assistant not found: {}", id),
            AssistantError::MissingApiKey(provider) => {
                write!(f, "API key required for provider: {}", provider)
            }
        }
    }
}

impl std::error::Error for AssistantError {}

// === ExportError ===

/// Errors related to exporting record collections.
#[derive(Debug, PartialEq)]
pub enum ExportError {
    /// The requested format is not one of json, csv/delimited, xml/markup.
    UnsupportedFormat(String),
    /// The encoder failed.
    Serialization(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::UnsupportedFormat(format) => {
                write!(f, "Unsupported export format: {}", format)
            }
            ExportError::Serialization(msg) => write!(f, "Export serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

// === GeneratorError ===

/// Errors related to the parsed-result generator.
#[derive(Debug, PartialEq)]
pub enum GeneratorError {
    /// Started outside of a tokio runtime.
    NoRuntime,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::NoRuntime => write!(f, "Generator requires a running tokio runtime"),
        }
    }
}

impl std::error::Error for GeneratorError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
