// Parser console shared type definitions
// Each submodule defines types used across the crate.

pub mod address;
pub mod any;
pub mod assistant;
pub mod auth;
pub mod card;
pub mod cookie;
pub mod dns;
pub mod email;
pub mod errors;
pub mod export;
pub mod license;
pub mod parsed;
pub mod phone;
pub mod proxy;
pub mod query;
pub mod record;
pub mod settings;
pub mod site;
pub mod stats;
