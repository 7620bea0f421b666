mod file;
mod options;

pub use file::{AutocompleteConfig, ConfigError, ProviderConfig};
pub use options::Options;

#[cfg(test)]
mod tests;
