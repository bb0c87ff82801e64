//! App Core for the parser console.
//!
//! Central struct holding every record store, manager and service, plus the
//! lifecycle of the simulated parsing loop.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use log::info;

use crate::managers::assistant_manager::AssistantManager;
use crate::managers::dns_manager::DnsManager;
use crate::managers::proxy_manager::{ProxyManager, ProxyManagerTrait};
use crate::managers::record_store::{RecordStore, RecordStoreTrait};
use crate::managers::site_manager::{SiteManager, SiteManagerTrait};
use crate::services::aggregator;
use crate::services::export_serializer;
use crate::services::parsing_generator::{
    lock_or_recover, ParsingGenerator, SharedResults, SharedSites,
};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::validator::RandomValidator;
use crate::types::address::AddressRecord;
use crate::types::any::AnyRecord;
use crate::types::auth::AuthRecord;
use crate::types::card::CardRecord;
use crate::types::cookie::{CookieRecord, SameSite};
use crate::types::email::EmailRecord;
use crate::types::errors::{ExportError, GeneratorError, SettingsError};
use crate::types::export::{ExportFormat, ExportPayload};
use crate::types::license::LicenseRecord;
use crate::types::phone::{PhoneRecord, PhoneType};
use crate::types::proxy::{ProxyEndpoint, ProxyProtocol};
use crate::types::record::Category;
use crate::types::site::{ParsingRule, RuleDataType};
use crate::types::stats::{DashboardStats, DatabaseStats, ParsingStats, RecordRollup};

/// Central application struct holding all stores, managers and services.
///
/// Sites and parsed results are shared with the generator task and live
/// behind `Arc<Mutex<_>>`; everything else is owned directly.
pub struct App {
    pub emails: RecordStore<EmailRecord>,
    pub cookies: RecordStore<CookieRecord>,
    pub phones: RecordStore<PhoneRecord>,
    pub auth_credentials: RecordStore<AuthRecord>,
    pub addresses: RecordStore<AddressRecord>,
    pub payment_cards: RecordStore<CardRecord>,
    pub licenses: RecordStore<LicenseRecord>,
    pub proxy_manager: ProxyManager,
    pub dns_manager: DnsManager,
    pub assistant_manager: AssistantManager,
    pub sites: SharedSites,
    pub parsed_results: SharedResults,
    pub settings_engine: SettingsEngine,
    pub validator: RandomValidator,
    generator: ParsingGenerator,
}

impl App {
    /// Creates a new App with empty record stores, the default DNS
    /// resolvers and the default assistant.
    ///
    /// Settings are loaded from `settings_path`, or from the platform config
    /// directory when `None`.
    pub fn new(settings_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;

        let results = match settings.generator.max_results {
            Some(max) => RecordStore::with_retention(max),
            None => RecordStore::new(),
        };

        Ok(Self {
            emails: RecordStore::new(),
            cookies: RecordStore::new(),
            phones: RecordStore::new(),
            auth_credentials: RecordStore::new(),
            addresses: RecordStore::new(),
            payment_cards: RecordStore::new(),
            licenses: RecordStore::new(),
            proxy_manager: ProxyManager::new(),
            dns_manager: DnsManager::with_defaults(),
            assistant_manager: AssistantManager::with_defaults(),
            sites: Arc::new(Mutex::new(SiteManager::new())),
            parsed_results: Arc::new(Mutex::new(results)),
            settings_engine,
            validator: RandomValidator::new(),
            generator: ParsingGenerator::new(&settings.generator),
        })
    }

    /// Fills the stores with a small demo data set: two emails, one cookie,
    /// one phone number, one proxy and one site with a title rule.
    pub fn seed_sample_data(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.emails
            .add(EmailRecord::new("user@example.com", "site1.com", true, true))?;
        self.emails
            .add(EmailRecord::new("admin@test.org", "site2.com", true, false))?;

        let mut cookie = CookieRecord::new("session_id", "abc123def456", "example.com", "example.com");
        cookie.http_only = true;
        cookie.secure = true;
        cookie.same_site = SameSite::Lax;
        self.cookies.add(cookie)?;

        let mut phone = PhoneRecord::new("+7 (999) 123-45-67", "Russia", PhoneType::Mobile, true, "site1.com");
        phone.region = Some("Moscow".to_string());
        self.phones.add(phone)?;

        self.proxy_manager
            .add_proxy(ProxyEndpoint::new("192.168.1.100", 8080, ProxyProtocol::Http))?;

        let mut sites = lock_or_recover(&self.sites);
        let site_id = sites.add_site("Example", "https://example.com")?;
        sites.add_rule(&site_id, ParsingRule::new("Title", "h1", RuleDataType::Text))?;

        info!("Seeded sample data");
        Ok(())
    }

    /// Record count of one category.
    pub fn category_count(&self, category: Category) -> usize {
        match category {
            Category::Email => self.emails.len(),
            Category::Cookie => self.cookies.len(),
            Category::Phone => self.phones.len(),
            Category::AuthCredential => self.auth_credentials.len(),
            Category::Address => self.addresses.len(),
            Category::PaymentCard => self.payment_cards.len(),
            Category::License => self.licenses.len(),
            Category::Proxy => self.proxy_manager.store().len(),
            Category::DnsEntry => self.dns_manager.store().len(),
            Category::ParsedPageResult => lock_or_recover(&self.parsed_results).len(),
        }
    }

    /// Counts and shares of the harvested-data categories.
    pub fn dashboard_stats(&self) -> DashboardStats {
        let counts: Vec<(Category, usize)> = Category::HARVESTED
            .iter()
            .map(|&c| (c, self.category_count(c)))
            .collect();
        aggregator::dashboard_stats(&counts)
    }

    pub fn database_stats(&self) -> DatabaseStats {
        aggregator::database_stats(lock_or_recover(&self.parsed_results).list())
    }

    pub fn parsing_stats(&self) -> ParsingStats {
        let sites = lock_or_recover(&self.sites);
        let results = lock_or_recover(&self.parsed_results);
        aggregator::parsing_stats(sites.list_sites(), results.list())
    }

    /// Every record of every category, wrapped for mixed handling.
    pub fn all_records(&self) -> Vec<AnyRecord> {
        fn wrap<T: Clone + Into<AnyRecord>>(records: &[T]) -> impl Iterator<Item = AnyRecord> + '_ {
            records.iter().cloned().map(Into::into)
        }

        let mut out: Vec<AnyRecord> = Vec::new();
        out.extend(wrap(self.emails.list()));
        out.extend(wrap(self.cookies.list()));
        out.extend(wrap(self.phones.list()));
        out.extend(wrap(self.auth_credentials.list()));
        out.extend(wrap(self.addresses.list()));
        out.extend(wrap(self.payment_cards.list()));
        out.extend(wrap(self.licenses.list()));
        out.extend(wrap(self.proxy_manager.store().list()));
        out.extend(wrap(self.dns_manager.store().list()));
        out.extend(wrap(lock_or_recover(&self.parsed_results).list()));
        out
    }

    /// Category/source/date rollup across every store.
    pub fn rollup(&self) -> RecordRollup {
        aggregator::rollup(&self.all_records())
    }

    /// Per-category record counts, in `Category::ALL` order.
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.category_count(c)))
            .collect()
    }

    /// Serializes one whole category.
    pub fn export_category(&self, category: Category, format: ExportFormat) -> Result<ExportPayload, ExportError> {
        match category {
            Category::Email => export_serializer::export(self.emails.list(), format),
            Category::Cookie => export_serializer::export(self.cookies.list(), format),
            Category::Phone => export_serializer::export(self.phones.list(), format),
            Category::AuthCredential => export_serializer::export(self.auth_credentials.list(), format),
            Category::Address => export_serializer::export(self.addresses.list(), format),
            Category::PaymentCard => export_serializer::export(self.payment_cards.list(), format),
            Category::License => export_serializer::export(self.licenses.list(), format),
            Category::Proxy => export_serializer::export(self.proxy_manager.store().list(), format),
            Category::DnsEntry => export_serializer::export(self.dns_manager.store().list(), format),
            Category::ParsedPageResult => {
                let results = lock_or_recover(&self.parsed_results);
                export_serializer::export(results.list(), format)
            }
        }
    }

    /// Serializes one category in the format configured under
    /// `export.default_format`.
    pub fn export_default(&self, category: Category) -> Result<ExportPayload, ExportError> {
        let format = self.settings_engine.get_settings().export.default_format;
        self.export_category(category, format)
    }

    /// Runs the validator over every proxy. Returns how many are working.
    pub fn check_proxies(&mut self) -> usize {
        self.proxy_manager.check_all(&mut self.validator)
    }

    /// Starts the parsing loop with the current generator settings.
    /// Returns `Ok(false)` if it was already running.
    pub fn start_parsing(&mut self) -> Result<bool, GeneratorError> {
        if self.generator.is_running() {
            return self
                .generator
                .start(self.sites.clone(), self.parsed_results.clone());
        }
        let settings = &self.settings_engine.get_settings().generator;
        lock_or_recover(&self.parsed_results).set_retention(settings.max_results);
        self.generator = ParsingGenerator::new(settings);
        self.generator
            .start(self.sites.clone(), self.parsed_results.clone())
    }

    /// Stops the parsing loop. Returns `false` if it was not running.
    pub fn stop_parsing(&mut self) -> bool {
        self.generator.stop()
    }

    /// Starts or stops the parsing loop. Returns whether it is now running.
    pub fn toggle_parsing(&mut self) -> Result<bool, GeneratorError> {
        if self.generator.is_running() {
            self.generator.stop();
            Ok(false)
        } else {
            self.start_parsing()?;
            Ok(true)
        }
    }

    pub fn is_parsing(&self) -> bool {
        self.generator.is_running()
    }

    /// Shutdown sequence: stop the parsing loop.
    pub fn shutdown(&mut self) {
        self.generator.stop();
        info!("Parser console shut down");
    }
}
