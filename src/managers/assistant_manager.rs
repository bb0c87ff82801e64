use log::{info, warn};

use crate::types::assistant::{
    AssistantConfig, AssistantPermissions, AssistantProvider, AssistantUpdate, Permission,
};
use crate::types::errors::AssistantError;

/// Trait defining AI assistant configuration operations.
pub trait AssistantManagerTrait {
    fn add_assistant(&mut self, config: AssistantConfig) -> Result<String, AssistantError>;
    fn update_assistant(&mut self, id: &str, update: AssistantUpdate) -> Result<(), AssistantError>;
    fn toggle_assistant(&mut self, id: &str) -> Result<bool, AssistantError>;
    fn set_permission(&mut self, id: &str, permission: Permission, granted: bool) -> Result<(), AssistantError>;
    fn remove_assistant(&mut self, id: &str) -> Result<(), AssistantError>;
    fn get_assistant(&self, id: &str) -> Option<&AssistantConfig>;
    fn list_assistants(&self) -> &[AssistantConfig];
    fn active_assistant(&self) -> Option<&AssistantConfig>;
}

/// In-memory list of configured assistants.
pub struct AssistantManager {
    assistants: Vec<AssistantConfig>,
}

impl AssistantManager {
    pub fn new() -> Self {
        Self {
            assistants: Vec::new(),
        }
    }

    /// Manager holding one keyless assistant on the free provider with
    /// every permission granted.
    pub fn with_defaults() -> Self {
        let mut assistant = AssistantConfig::new("Free Assistant", AssistantProvider::Free, None);
        assistant.permissions = AssistantPermissions::all_granted();
        Self {
            assistants: vec![assistant],
        }
    }

    fn check_api_key(provider: AssistantProvider, api_key: Option<&str>) -> Result<(), AssistantError> {
        let has_key = api_key.map(|k| !k.trim().is_empty()).unwrap_or(false);
        if provider.requires_api_key() && !has_key {
            return Err(AssistantError::MissingApiKey(provider.to_string()));
        }
        Ok(())
    }

    fn assistant_mut(&mut self, id: &str) -> Result<&mut AssistantConfig, AssistantError> {
        self.assistants
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AssistantError::NotFound(id.to_string()))
    }
}

impl Default for AssistantManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantManagerTrait for AssistantManager {
    /// Adds an assistant. Hosted providers must come with an API key.
    fn add_assistant(&mut self, config: AssistantConfig) -> Result<String, AssistantError> {
        if let Err(e) = Self::check_api_key(config.provider, config.api_key.as_deref()) {
            warn!("Rejected assistant {}: {}", config.name, e);
            return Err(e);
        }
        let id = config.id.clone();
        info!("Added assistant {} ({} / {})", config.name, config.provider, config.model);
        self.assistants.push(config);
        Ok(id)
    }

    fn update_assistant(&mut self, id: &str, update: AssistantUpdate) -> Result<(), AssistantError> {
        let assistant = self.assistant_mut(id)?;

        let api_key = update.api_key.or_else(|| assistant.api_key.clone());
        Self::check_api_key(assistant.provider, api_key.as_deref())?;

        assistant.api_key = api_key;
        if let Some(name) = update.name {
            assistant.name = name;
        }
        if let Some(model) = update.model {
            assistant.model = model;
        }
        if let Some(restrictions) = update.restrictions {
            assistant.restrictions = restrictions;
        }
        Ok(())
    }

    fn toggle_assistant(&mut self, id: &str) -> Result<bool, AssistantError> {
        let assistant = self.assistant_mut(id)?;
        assistant.is_active = !assistant.is_active;
        Ok(assistant.is_active)
    }

    fn set_permission(&mut self, id: &str, permission: Permission, granted: bool) -> Result<(), AssistantError> {
        let assistant = self.assistant_mut(id)?;
        assistant.permissions.set(permission, granted);
        Ok(())
    }

    fn remove_assistant(&mut self, id: &str) -> Result<(), AssistantError> {
        let before = self.assistants.len();
        self.assistants.retain(|a| a.id != id);
        if self.assistants.len() == before {
            return Err(AssistantError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn get_assistant(&self, id: &str) -> Option<&AssistantConfig> {
        self.assistants.iter().find(|a| a.id == id)
    }

    fn list_assistants(&self) -> &[AssistantConfig] {
        &self.assistants
    }

    /// First active assistant in list order.
    fn active_assistant(&self) -> Option<&AssistantConfig> {
        self.assistants.iter().find(|a| a.is_active)
    }
}
