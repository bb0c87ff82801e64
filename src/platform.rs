// Parser console platform paths
// Only the configuration directory is needed: the engine keeps no data on disk.

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for the parser console.
///
/// - **Linux**: `$XDG_CONFIG_HOME/parser_console` or `~/.config/parser_console`
/// - **macOS**: `~/Library/Application Support/ParserConsole`
/// - **Windows**: `%APPDATA%/ParserConsole`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("ParserConsole")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join("ParserConsole")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("parser_console")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("parser_console")
        }
    }
}
