//! Registry tests against files on disk

use crate::common::{fixture_path, shipped_default_map};
use marka_babel::registry::{FileSource, RuleSource};
use marka_babel::{MappingPaths, MappingRegistry, MappingRule, RegistryConfig};

fn fixture(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_user_entry_replaces_default_for_same_token() {
    let registry = MappingRegistry::new(RegistryConfig::new(shipped_default_map(), fixture("user.json")));
    let rules = registry.load_rules().await;

    let headings: Vec<&MappingRule> = rules.iter().filter(|r| r.token == "# ").collect();
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].element, "h2");
    assert_eq!(rules[0].token, "# ");
}

#[tokio::test]
async fn test_new_user_tokens_are_appended() {
    let registry = MappingRegistry::new(RegistryConfig::new(shipped_default_map(), fixture("user.json")));
    let rules = registry.load_rules().await;

    let tail: Vec<&str> = rules[rules.len() - 3..]
        .iter()
        .map(|r| r.token.as_str())
        .collect();
    assert_eq!(tail, vec!["+ ", "~~", "!! "]);
}

#[tokio::test]
async fn test_both_sources_unavailable() {
    let registry = MappingRegistry::new(RegistryConfig::new(
        fixture("missing.json"),
        fixture("broken.json"),
    ));
    assert!(registry.load_rules().await.is_empty());
}

#[tokio::test]
async fn test_configure_with_partial_paths() {
    let mut registry = MappingRegistry::new(RegistryConfig::new(
        fixture("missing.json"),
        fixture("user.json"),
    ));
    let config = registry.configure(MappingPaths {
        default_map: Some(shipped_default_map()),
        user_map: None,
    });
    assert_eq!(config.user_map, fixture("user.json"));

    let rules = registry.load_rules().await;
    assert!(rules.iter().any(|r| r.token == "#### "));
    assert!(rules.iter().any(|r| r.token == "!! "));
}

#[tokio::test]
async fn test_shipped_table_parses_completely() {
    let rules = FileSource.fetch(&shipped_default_map()).await.unwrap();
    assert_eq!(rules.len(), 14);
    assert!(rules.iter().any(|r| r.is_fence()));
    assert!(rules.iter().any(|r| r.is_link));
    assert!(rules.iter().any(|r| r.is_image));
}
