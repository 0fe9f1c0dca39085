//! API key resolution.
//!
//! The key can come from the command line, the environment or the config
//! file. It is resolved on demand for every lookup and never cached.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone, Default)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of resolving the API key.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// No source provided a non-empty key.
    Missing { reason: String },
}

/// Where to look for the API key, in priority order:
/// explicit override, environment variable, config file.
#[derive(Debug, Clone)]
pub struct ApiKeySource {
    override_key: Option<SecureString>,
    env_var: String,
    file_key: Option<SecureString>,
}

impl ApiKeySource {
    pub fn from_config(api: &ApiConfig) -> Self {
        Self {
            override_key: None,
            env_var: api.api_key_env.clone(),
            file_key: non_empty(api.api_key.clone()),
        }
    }

    /// Key passed explicitly (e.g. on the command line); wins over everything.
    pub fn with_override(mut self, key: Option<String>) -> Self {
        self.override_key = non_empty(key);
        self
    }

    /// Environment variable consulted when no override is given.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    pub fn resolve(&self) -> CredentialStatus {
        if let Some(key) = &self.override_key {
            return CredentialStatus::Configured(key.clone());
        }

        if let Some(key) = non_empty(std::env::var(&self.env_var).ok()) {
            return CredentialStatus::Configured(key);
        }

        if let Some(key) = &self.file_key {
            return CredentialStatus::Configured(key.clone());
        }

        CredentialStatus::Missing {
            reason: format!(
                "Environment variable {} not set and no api.api_key in config",
                self.env_var
            ),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<SecureString> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(SecureString::new)
}
