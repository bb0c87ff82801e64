use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssistantProvider {
    OpenAI,
    Anthropic,
    Google,
    Local,
    Free,
}

impl AssistantProvider {
    /// Whether the provider cannot be used without an API key.
    pub fn requires_api_key(&self) -> bool {
        matches!(
            self,
            AssistantProvider::OpenAI | AssistantProvider::Anthropic | AssistantProvider::Google
        )
    }

    /// Models offered for the provider; the first is the default.
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            AssistantProvider::OpenAI => &["gpt-4", "gpt-3.5-turbo", "gpt-4-turbo"],
            AssistantProvider::Anthropic => &["claude-3-opus", "claude-3-sonnet", "claude-3-haiku"],
            AssistantProvider::Google => &["gemini-pro", "gemini-pro-vision"],
            AssistantProvider::Local => &["llama2", "codellama", "mistral"],
            AssistantProvider::Free => &["huggingface-inference", "replicate-free", "cohere-trial"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantProvider::OpenAI => "openai",
            AssistantProvider::Anthropic => "anthropic",
            AssistantProvider::Google => "google",
            AssistantProvider::Local => "local",
            AssistantProvider::Free => "free",
        }
    }
}

impl fmt::Display for AssistantProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One capability an assistant can be granted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ModifyCode,
    AccessDatabase,
    ManageProxies,
    ManageSites,
    ViewLogs,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::ModifyCode,
        Permission::AccessDatabase,
        Permission::ManageProxies,
        Permission::ManageSites,
        Permission::ViewLogs,
    ];
}

/// Fixed permission set of an assistant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssistantPermissions {
    pub modify_code: bool,
    pub access_database: bool,
    pub manage_proxies: bool,
    pub manage_sites: bool,
    pub view_logs: bool,
}

impl AssistantPermissions {
    pub fn all_granted() -> Self {
        Self {
            modify_code: true,
            access_database: true,
            manage_proxies: true,
            manage_sites: true,
            view_logs: true,
        }
    }

    pub fn get(&self, permission: Permission) -> bool {
        match permission {
            Permission::ModifyCode => self.modify_code,
            Permission::AccessDatabase => self.access_database,
            Permission::ManageProxies => self.manage_proxies,
            Permission::ManageSites => self.manage_sites,
            Permission::ViewLogs => self.view_logs,
        }
    }

    pub fn set(&mut self, permission: Permission, granted: bool) {
        let slot = match permission {
            Permission::ModifyCode => &mut self.modify_code,
            Permission::AccessDatabase => &mut self.access_database,
            Permission::ManageProxies => &mut self.manage_proxies,
            Permission::ManageSites => &mut self.manage_sites,
            Permission::ViewLogs => &mut self.view_logs,
        };
        *slot = granted;
    }

    pub fn granted(&self) -> Vec<Permission> {
        Permission::ALL
            .iter()
            .copied()
            .filter(|p| self.get(*p))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantRestrictions {
    pub max_requests_per_hour: u32,
    pub allowed_domains: Vec<String>,
    pub forbidden_actions: Vec<String>,
}

impl Default for AssistantRestrictions {
    fn default() -> Self {
        Self {
            max_requests_per_hour: 100,
            allowed_domains: Vec::new(),
            forbidden_actions: Vec::new(),
        }
    }
}

/// A configured AI assistant and its credentials.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    pub id: String,
    pub name: String,
    pub provider: AssistantProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub is_active: bool,
    pub permissions: AssistantPermissions,
    pub restrictions: AssistantRestrictions,
}

impl AssistantConfig {
    /// Creates an active assistant with the provider's default model, no
    /// permissions and default restrictions.
    pub fn new(name: &str, provider: AssistantProvider, api_key: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            provider,
            api_key: api_key.map(|k| k.to_string()),
            model: provider.models()[0].to_string(),
            is_active: true,
            permissions: AssistantPermissions::default(),
            restrictions: AssistantRestrictions::default(),
        }
    }
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("is_active", &self.is_active)
            .field("permissions", &self.permissions)
            .field("restrictions", &self.restrictions)
            .finish()
    }
}

/// Partial update of an assistant; `None` leaves a value untouched.
#[derive(Debug, Clone, Default)]
pub struct AssistantUpdate {
    pub name: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub restrictions: Option<AssistantRestrictions>,
}
