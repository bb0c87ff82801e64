use parser_console::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::NotFound("rec-1".to_string()).to_string(),
        "Record not found: rec-1"
    );
    assert_eq!(
        StoreError::DuplicateId("rec-2".to_string()).to_string(),
        "Record already exists: rec-2"
    );
    assert_eq!(
        StoreError::IdChanged("rec-3".to_string()).to_string(),
        "Record ID cannot be changed: rec-3"
    );
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === SiteError Tests ===

#[test]
fn site_error_display_variants() {
    assert_eq!(
        SiteError::NotFound("s1".to_string()).to_string(),
        "Site not found: s1"
    );
    assert_eq!(
        SiteError::RuleNotFound("r1".to_string()).to_string(),
        "Parsing rule not found: r1"
    );
    assert_eq!(
        SiteError::InvalidUrl("ftp://x".to_string()).to_string(),
        "Invalid site URL: ftp://x"
    );
}

// === AssistantError Tests ===

#[test]
fn assistant_error_display_variants() {
    assert_eq!(
        AssistantError::NotFound("a1".to_string()).to_string(),
        "Assistant not found: a1"
    );
    assert_eq!(
        AssistantError::MissingApiKey("openai".to_string()).to_string(),
        "API key required for provider: openai"
    );
}

// === ExportError Tests ===

#[test]
fn export_error_display_variants() {
    assert_eq!(
        ExportError::UnsupportedFormat("yaml".to_string()).to_string(),
        "Unsupported export format: yaml"
    );
    assert_eq!(
        ExportError::Serialization("boom".to_string()).to_string(),
        "Export serialization error: boom"
    );
}

#[test]
fn export_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(ExportError::UnsupportedFormat("yaml".to_string()));
    assert!(err.source().is_none());
}

// === GeneratorError Tests ===

#[test]
fn generator_error_display() {
    assert_eq!(
        GeneratorError::NoRuntime.to_string(),
        "Generator requires a running tokio runtime"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}
