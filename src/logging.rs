//! Logger initialization for the binary.
//!
//! Library code only emits through the `log` facade; this is the one place
//! a logger gets installed.

use std::io::Write;
use std::str::FromStr;

use log::LevelFilter;

/// Parses a level name, falling back to `Info` for anything unknown.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

/// Installs `env_logger` configured from `RUST_LOG` alone, defaulting to
/// `info`.
///
/// Records from this crate pass the logger's own filter at every level so
/// `apply_level` can raise or lower verbosity once settings are loaded.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    let initial = std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info);

    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Info);
    }
    builder.filter_module("parser_console", LevelFilter::Trace);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    log::set_max_level(initial);
    Ok(())
}

/// Applies `level` (usually `logging.level` from the settings file) as the
/// global maximum.
pub fn apply_level(level: &str) {
    let level = parse_level(level);
    log::set_max_level(level);
    log::debug!("Log level set to {}", level);
}
