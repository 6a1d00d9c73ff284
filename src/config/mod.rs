//! Configuration: TOML file loading, validation, and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use types::{Config, LibraryConfig, ProviderConfig};
