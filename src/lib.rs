//! Parser console: in-memory record stores, statistics, filtering and export
//! for a web-scraping control panel.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
