use serde::{Deserialize, Serialize};

use super::export::ExportFormat;

/// Top-level engine settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngineSettings {
    pub generator: GeneratorSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

/// Mock parsed-result generator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorSettings {
    pub interval_secs: u64,
    /// Probability in `[0, 1]` that a generated result is a success.
    pub success_rate: f64,
    /// Keep at most this many parsed results; `None` keeps everything.
    pub max_results: Option<usize>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            success_rate: 0.8,
            max_results: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportSettings {
    pub default_format: ExportFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
