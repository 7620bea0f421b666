use super::*;
use crate::types::MatchStrategy;
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = AutocompleteConfig::load(&AutocompleteConfig::path(temp.path())).unwrap();
    assert_eq!(config, AutocompleteConfig::default());
    assert_eq!(config.provider.kind, "memory");
    assert_eq!(config.options.namespace.as_str(), "autocomplete");
    assert_eq!(config.options.strategy, MatchStrategy::Substring);
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = AutocompleteConfig::path(temp.path());

    let mut config = AutocompleteConfig::default();
    config.provider.kind = "redb".to_string();
    config
        .provider
        .settings
        .insert("path".to_string(), toml::Value::String("/tmp/x.redb".to_string()));
    config.options.strategy = MatchStrategy::NOrMoreGram;
    config.options.ngram_size = 4;
    config.save(&path).unwrap();

    assert_eq!(AutocompleteConfig::load(&path).unwrap(), config);
}

#[test]
fn partial_file_fills_in_defaults() {
    let config: AutocompleteConfig = toml::from_str(
        r#"
        [options]
        strategy = "n_gram"
        case_sensitive = true
        "#,
    )
    .unwrap();

    assert_eq!(config.options.strategy, MatchStrategy::NGram);
    assert!(config.options.case_sensitive);
    assert_eq!(config.options.max_limit, 100);
    assert_eq!(config.options.default_limit, 10);
    assert_eq!(config.provider.kind, "memory");
}

#[test]
fn blank_namespace_is_rejected() {
    let result: Result<AutocompleteConfig, _> = toml::from_str("[options]\nnamespace = \"  \"\n");
    result.unwrap_err();
}

#[test]
fn validate_reports_bad_limits() {
    let mut config = AutocompleteConfig::default();
    config.options.default_limit = 0;
    config.options.max_limit = 0;
    config.options.ngram_size = 0;
    assert_eq!(config.validate().len(), 3);

    config.options.default_limit = 50;
    config.options.max_limit = 20;
    config.options.ngram_size = 3;
    assert_eq!(config.validate().len(), 1);
}

#[test]
fn with_defaults_for_invalid_repairs_values() {
    let mut config = AutocompleteConfig::default();
    config.provider.kind = " ".to_string();
    config.options.default_limit = 500;
    config.options.max_limit = 0;
    config.options.ngram_size = 0;

    let repaired = config.with_defaults_for_invalid();
    assert!(repaired.validate().is_empty());
    assert_eq!(repaired.provider.kind, "memory");
    assert_eq!(repaired.options.max_limit, 100);
    assert_eq!(repaired.options.default_limit, 10);
    assert_eq!(repaired.options.ngram_size, 3);
}
