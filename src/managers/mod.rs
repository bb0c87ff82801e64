// Parser console state managers
// Managers own the mutable collections: records per category, proxies, DNS resolvers, sites, assistants.

pub mod assistant_manager;
pub mod dns_manager;
pub mod proxy_manager;
pub mod record_store;
pub mod site_manager;
