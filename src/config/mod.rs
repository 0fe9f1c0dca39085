mod credentials;
mod loader;
mod types;

pub use credentials::{ApiKeySource, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
