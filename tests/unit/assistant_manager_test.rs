use parser_console::managers::assistant_manager::{AssistantManager, AssistantManagerTrait};
use parser_console::types::assistant::{
    AssistantConfig, AssistantProvider, AssistantRestrictions, AssistantUpdate, Permission,
};
use parser_console::types::errors::AssistantError;

#[test]
fn test_default_assistant() {
    let mgr = AssistantManager::with_defaults();
    let assistant = mgr.active_assistant().unwrap();
    assert_eq!(assistant.provider, AssistantProvider::Free);
    assert_eq!(assistant.model, "huggingface-inference");
    assert!(assistant.api_key.is_none());
    assert_eq!(assistant.permissions.granted(), Permission::ALL.to_vec());
    assert_eq!(assistant.restrictions.max_requests_per_hour, 100);
}

#[test]
fn test_hosted_provider_requires_key() {
    let mut mgr = AssistantManager::new();
    let err = mgr
        .add_assistant(AssistantConfig::new("GPT", AssistantProvider::OpenAI, None))
        .unwrap_err();
    assert_eq!(err, AssistantError::MissingApiKey("openai".to_string()));

    let blank = AssistantConfig::new("GPT", AssistantProvider::OpenAI, Some("  "));
    assert!(mgr.add_assistant(blank).is_err());

    let id = mgr
        .add_assistant(AssistantConfig::new("GPT", AssistantProvider::OpenAI, Some("sk-1")))
        .unwrap();
    assert_eq!(mgr.get_assistant(&id).unwrap().model, "gpt-4");
}

#[test]
fn test_local_provider_needs_no_key() {
    let mut mgr = AssistantManager::new();
    let id = mgr
        .add_assistant(AssistantConfig::new("Llama", AssistantProvider::Local, None))
        .unwrap();
    assert_eq!(mgr.get_assistant(&id).unwrap().model, "llama2");
}

#[test]
fn test_update_assistant() {
    let mut mgr = AssistantManager::new();
    let id = mgr
        .add_assistant(AssistantConfig::new("Claude", AssistantProvider::Anthropic, Some("key")))
        .unwrap();

    mgr.update_assistant(
        &id,
        AssistantUpdate {
            model: Some("claude-3-haiku".to_string()),
            restrictions: Some(AssistantRestrictions {
                max_requests_per_hour: 10,
                allowed_domains: vec!["example.com".to_string()],
                forbidden_actions: vec!["delete".to_string()],
            }),
            ..AssistantUpdate::default()
        },
    )
    .unwrap();

    let assistant = mgr.get_assistant(&id).unwrap();
    assert_eq!(assistant.name, "Claude");
    assert_eq!(assistant.model, "claude-3-haiku");
    assert_eq!(assistant.api_key.as_deref(), Some("key"));
    assert_eq!(assistant.restrictions.max_requests_per_hour, 10);
}

#[test]
fn test_permissions_toggle_individually() {
    let mut mgr = AssistantManager::new();
    let id = mgr
        .add_assistant(AssistantConfig::new("Free", AssistantProvider::Free, None))
        .unwrap();
    assert!(mgr.get_assistant(&id).unwrap().permissions.granted().is_empty());

    mgr.set_permission(&id, Permission::ViewLogs, true).unwrap();
    mgr.set_permission(&id, Permission::ManageSites, true).unwrap();
    mgr.set_permission(&id, Permission::ViewLogs, false).unwrap();

    let permissions = &mgr.get_assistant(&id).unwrap().permissions;
    assert_eq!(permissions.granted(), vec![Permission::ManageSites]);
    assert!(permissions.get(Permission::ManageSites));
    assert!(!permissions.get(Permission::ModifyCode));
}

#[test]
fn test_toggle_and_active() {
    let mut mgr = AssistantManager::with_defaults();
    let first = mgr.list_assistants()[0].id.clone();
    let second = mgr
        .add_assistant(AssistantConfig::new("Local", AssistantProvider::Local, None))
        .unwrap();

    assert_eq!(mgr.active_assistant().unwrap().id, first);
    assert!(!mgr.toggle_assistant(&first).unwrap());
    assert_eq!(mgr.active_assistant().unwrap().id, second);
    mgr.toggle_assistant(&second).unwrap();
    assert!(mgr.active_assistant().is_none());
}

#[test]
fn test_remove_and_missing() {
    let mut mgr = AssistantManager::with_defaults();
    let id = mgr.list_assistants()[0].id.clone();
    mgr.remove_assistant(&id).unwrap();
    assert!(mgr.list_assistants().is_empty());
    assert_eq!(
        mgr.remove_assistant(&id).unwrap_err(),
        AssistantError::NotFound(id.clone())
    );
    assert!(mgr.set_permission(&id, Permission::ViewLogs, true).is_err());
}

#[test]
fn test_debug_masks_api_key() {
    let config = AssistantConfig::new("GPT", AssistantProvider::OpenAI, Some("sk-secret"));
    let printed = format!("{:?}", config);
    assert!(!printed.contains("sk-secret"));
    assert!(printed.contains("***"));
}
