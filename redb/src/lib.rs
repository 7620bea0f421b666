//! Persistent ordered-store provider for `lexis_core`, built on redb.
//!
//! ```toml
//! [provider]
//! kind = "redb"
//! path = "/var/lib/lexis/index.redb"
//! ```

mod error;
mod meta;
mod store;

pub use error::DatabaseError;
pub use meta::{MetaV1, VersionedMeta};
pub use store::{RedbConfig, RedbStore};

use lexis_core::{Provider, ProviderError, ProviderRegistry, RangeProvider};

/// Name under which [`register`] adds this backend.
pub const PROVIDER_NAME: &str = "redb";

/// Opens a provider over the database at `config.path`.
pub fn open(config: &RedbConfig) -> Result<RangeProvider<RedbStore>, DatabaseError> {
    Ok(RangeProvider::new(RedbStore::open(config)?))
}

/// Registers the redb backend. Expects a `path` setting.
pub fn register(registry: &mut ProviderRegistry) {
    registry.register(PROVIDER_NAME, |settings| {
        let config: RedbConfig = toml::Value::Table(settings.clone())
            .try_into()
            .map_err(|err: toml::de::Error| ProviderError::InvalidConfig(err.to_string()))?;
        let provider = open(&config).map_err(|err| ProviderError::Store(err.into()))?;
        Ok(Box::new(provider) as Box<dyn Provider>)
    });
}
