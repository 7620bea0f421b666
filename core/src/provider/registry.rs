use crate::error::{Error, Result};
use crate::provider::{Provider, ProviderError};
use std::collections::HashMap;

/// Builds a provider from the settings of its `[provider]` config section.
pub type ProviderFactory =
    Box<dyn Fn(&toml::Table) -> std::result::Result<Box<dyn Provider>, ProviderError> + Send + Sync>;

/// Name → factory map, built once at startup and passed to whoever opens
/// providers. Names are case-insensitive.
#[derive(Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering an existing name replaces its factory.
    pub fn register<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(&toml::Table) -> std::result::Result<Box<dyn Provider>, ProviderError>
            + Send
            + Sync
            + 'static,
    {
        self.factories
            .insert(name.to_lowercase(), Box::new(factory));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn create(&self, name: &str, settings: &toml::Table) -> Result<Box<dyn Provider>> {
        let factory = self
            .factories
            .get(&name.to_lowercase())
            .ok_or_else(|| Error::ProviderNotFound(name.to_string()))?;

        let provider = factory(settings)?;
        tracing::info!(provider = name, "opened provider");
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory;

    #[test]
    fn names_are_case_insensitive() {
        let mut registry = ProviderRegistry::new();
        memory::register(&mut registry);

        assert!(registry.contains("Memory"));
        assert!(registry.create("MEMORY", &toml::Table::new()).is_ok());
        assert_eq!(registry.names(), ["memory"]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = ProviderRegistry::new();
        assert!(matches!(
            registry.create("redis", &toml::Table::new()),
            Err(Error::ProviderNotFound(name)) if name == "redis"
        ));
    }

    #[test]
    fn factory_errors_surface() {
        let mut registry = ProviderRegistry::new();
        registry.register("broken", |_| {
            Err(ProviderError::InvalidConfig("missing path".to_string()))
        });

        assert!(matches!(
            registry.create("broken", &toml::Table::new()),
            Err(Error::Provider(ProviderError::InvalidConfig(_)))
        ));
    }
}
