//! Unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface:
//! default loading, value persistence, validation and reset.

use parser_console::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use parser_console::types::errors::SettingsError;
use parser_console::types::export::ExportFormat;
use parser_console::types::settings::EngineSettings;
use serde_json::json;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file, `load()` returns the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, EngineSettings::default());
    assert_eq!(settings.generator.interval_secs, 5);
    assert_eq!(settings.generator.max_results, None);
    assert_eq!(settings.export.default_format, ExportFormat::Json);
    assert_eq!(settings.logging.level, "info");
}

/// A value set through one engine is read back by a fresh engine on the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("generator.interval_secs", json!(2)).unwrap();
        engine.set_value("export.default_format", json!("markup")).unwrap();
        engine.set_value("generator.max_results", json!(50)).unwrap();
    }

    let mut engine2 = engine_in_temp(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.generator.interval_secs, 2);
    assert_eq!(loaded.generator.max_results, Some(50));
    assert_eq!(loaded.export.default_format, ExportFormat::Markup);
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    for key in ["", "generator.unknown", "nope", "logging.level.deeper"] {
        let err = engine.set_value(key, json!(1)).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidKey(_)),
            "key {:?} should be rejected, got {:?}",
            key,
            err
        );
    }
    assert_eq!(*engine.get_settings(), EngineSettings::default());
}

/// A value of the wrong type is rejected and the stored settings stay as they were.
#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let err = engine
        .set_value("generator.interval_secs", json!("soon"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue(_)));

    let err = engine
        .set_value("export.default_format", json!("yaml"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue(_)));

    assert_eq!(*engine.get_settings(), EngineSettings::default());
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn test_success_rate_must_be_a_probability() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    for bad in [json!(1.5), json!(-0.1)] {
        let err = engine.set_value("generator.success_rate", bad).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue(_)));
    }
    engine.set_value("generator.success_rate", json!(1.0)).unwrap();
    assert_eq!(engine.get_settings().generator.success_rate, 1.0);
}

/// After `reset()` the defaults are both in memory and on disk.
#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("logging.level", json!("debug")).unwrap();
        assert_eq!(engine.get_settings().logging.level, "debug");

        engine.reset().unwrap();
        assert_eq!(*engine.get_settings(), EngineSettings::default());
    }

    let mut engine2 = engine_in_temp(&dir);
    assert_eq!(engine2.load().unwrap(), EngineSettings::default());
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    let err = engine.load().unwrap_err();
    assert!(matches!(err, SettingsError::SerializationError(_)));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.reset().unwrap();

    assert!(path.exists());
    assert_eq!(engine.get_config_path(), path.to_string_lossy());
}
