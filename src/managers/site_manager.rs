//! Site Manager for the parser console.
//!
//! Implements `SiteManagerTrait`: scraping targets, their parsing rules and
//! request options. Rules are stored for display and export only.

use log::{debug, info, warn};

use crate::types::errors::SiteError;
use crate::types::site::{ParsingRule, SiteConfig, SiteUpdate};

/// Trait defining site configuration operations.
pub trait SiteManagerTrait {
    fn add_site(&mut self, name: &str, url: &str) -> Result<String, SiteError>;
    fn update_site(&mut self, id: &str, update: SiteUpdate) -> Result<(), SiteError>;
    fn toggle_site(&mut self, id: &str) -> Result<bool, SiteError>;
    fn remove_site(&mut self, id: &str) -> Result<(), SiteError>;
    fn add_rule(&mut self, site_id: &str, rule: ParsingRule) -> Result<String, SiteError>;
    fn remove_rule(&mut self, site_id: &str, rule_id: &str) -> Result<(), SiteError>;
    fn toggle_rule(&mut self, site_id: &str, rule_id: &str) -> Result<bool, SiteError>;
    fn get_site(&self, id: &str) -> Option<&SiteConfig>;
    fn list_sites(&self) -> &[SiteConfig];
    fn active_sites(&self) -> Vec<&SiteConfig>;
    fn enabled_rule_count(&self, site_id: &str) -> Result<usize, SiteError>;
}

/// In-memory site list.
pub struct SiteManager {
    sites: Vec<SiteConfig>,
}

impl SiteManager {
    pub fn new() -> Self {
        Self { sites: Vec::new() }
    }

    fn validate_url(url: &str) -> Result<(), SiteError> {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| SiteError::InvalidUrl(url.to_string()))?;
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(SiteError::InvalidUrl(url.to_string()));
        }
        Ok(())
    }

    fn site_mut(&mut self, id: &str) -> Result<&mut SiteConfig, SiteError> {
        self.sites
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SiteError::NotFound(id.to_string()))
    }

    fn rule_mut<'a>(site: &'a mut SiteConfig, rule_id: &str) -> Result<&'a mut ParsingRule, SiteError> {
        site.parsing_rules
            .iter_mut()
            .find(|r| r.id == rule_id)
            .ok_or_else(|| SiteError::RuleNotFound(rule_id.to_string()))
    }
}

impl Default for SiteManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteManagerTrait for SiteManager {
    /// Adds an active site with default request options. Only http(s)
    /// URLs are accepted.
    fn add_site(&mut self, name: &str, url: &str) -> Result<String, SiteError> {
        if let Err(e) = Self::validate_url(url) {
            warn!("Rejected site {}: {}", name, e);
            return Err(e);
        }
        let site = SiteConfig::new(name, url);
        let id = site.id.clone();
        self.sites.push(site);
        info!("Added site {} ({})", name, url);
        Ok(id)
    }

    fn update_site(&mut self, id: &str, update: SiteUpdate) -> Result<(), SiteError> {
        if let Some(url) = &update.url {
            Self::validate_url(url)?;
        }
        let site = self.site_mut(id)?;

        if let Some(url) = update.url {
            site.url = url;
        }
        if let Some(name) = update.name {
            site.name = name;
        }
        if let Some(headers) = update.custom_headers {
            site.custom_headers = headers;
        }
        if let Some(auth) = update.auth {
            site.auth = Some(auth);
        }
        if let Some(delay) = update.delay_ms {
            site.delay_ms = delay;
        }
        if let Some(retries) = update.retry_count {
            site.retry_count = retries;
        }
        if let Some(timeout) = update.timeout_ms {
            site.timeout_ms = timeout;
        }
        if let Some(follow) = update.follow_redirects {
            site.follow_redirects = follow;
        }
        if let Some(validate) = update.validate_ssl {
            site.validate_ssl = validate;
        }
        debug!("Updated site {}", id);
        Ok(())
    }

    fn toggle_site(&mut self, id: &str) -> Result<bool, SiteError> {
        let site = self.site_mut(id)?;
        site.is_active = !site.is_active;
        Ok(site.is_active)
    }

    fn remove_site(&mut self, id: &str) -> Result<(), SiteError> {
        let before = self.sites.len();
        self.sites.retain(|s| s.id != id);
        if self.sites.len() == before {
            return Err(SiteError::NotFound(id.to_string()));
        }
        info!("Removed site {}", id);
        Ok(())
    }

    fn add_rule(&mut self, site_id: &str, rule: ParsingRule) -> Result<String, SiteError> {
        let site = self.site_mut(site_id)?;
        let id = rule.id.clone();
        site.parsing_rules.push(rule);
        Ok(id)
    }

    fn remove_rule(&mut self, site_id: &str, rule_id: &str) -> Result<(), SiteError> {
        let site = self.site_mut(site_id)?;
        let before = site.parsing_rules.len();
        site.parsing_rules.retain(|r| r.id != rule_id);
        if site.parsing_rules.len() == before {
            return Err(SiteError::RuleNotFound(rule_id.to_string()));
        }
        Ok(())
    }

    fn toggle_rule(&mut self, site_id: &str, rule_id: &str) -> Result<bool, SiteError> {
        let site = self.site_mut(site_id)?;
        let rule = Self::rule_mut(site, rule_id)?;
        rule.is_enabled = !rule.is_enabled;
        Ok(rule.is_enabled)
    }

    fn get_site(&self, id: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.id == id)
    }

    fn list_sites(&self) -> &[SiteConfig] {
        &self.sites
    }

    fn active_sites(&self) -> Vec<&SiteConfig> {
        self.sites.iter().filter(|s| s.is_active).collect()
    }

    fn enabled_rule_count(&self, site_id: &str) -> Result<usize, SiteError> {
        self.get_site(site_id)
            .map(|s| s.enabled_rules().count())
            .ok_or_else(|| SiteError::NotFound(site_id.to_string()))
    }
}
