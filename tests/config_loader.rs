mod common;

use common::{temp_config, UNSET_ENV};
use moviesearch::config::{ApiConfig, ApiKeySource, Config, ConfigError, CredentialStatus};

fn resolved_key(source: &ApiKeySource) -> Option<String> {
    match source.resolve() {
        CredentialStatus::Configured(key) => Some(key.expose().to_string()),
        CredentialStatus::Missing { .. } => None,
    }
}

/// Test that Config::default() points at the public OMDb endpoint.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://www.omdbapi.com/");
    assert_eq!(config.api.api_key, None);
    assert_eq!(config.api.api_key_env, "OMDB_API_KEY");
    assert_eq!(config.api.timeout_seconds, None);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("moviesearch/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.api.base_url, "http://www.omdbapi.com/");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://omdb.example.test/"
api_key = "from-file"
api_key_env = "MY_OMDB_KEY"
timeout_seconds = 15

[ui]
tick_rate_ms = 100

[logging]
level = "debug"
file = "/tmp/moviesearch-test.log"
"#,
    );

    let config = Config::load_from(&path).expect("config loads");
    assert_eq!(config.api.base_url, "https://omdb.example.test/");
    assert_eq!(config.api.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.api.api_key_env, "MY_OMDB_KEY");
    assert_eq!(config.api.timeout_seconds, Some(15));
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/moviesearch-test.log"))
    );
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config("[api]\napi_key = \"abc\"\n");

    let config = Config::load_from(&path).expect("config loads");
    assert_eq!(config.api.api_key.as_deref(), Some("abc"));
    assert_eq!(config.api.base_url, "http://www.omdbapi.com/");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    let err = Config::load_from(&path).expect_err("parse fails");
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_non_http_base_url_is_rejected() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://example.test/\"\n");

    let err = Config::load_from(&path).expect_err("validation fails");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("http or https"));
}

#[test]
fn test_unparseable_base_url_is_rejected() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let mut config = Config::default();
    config.api.timeout_seconds = Some(0);
    let err = config.validate().expect_err("validation fails");
    assert!(err.to_string().contains("timeout_seconds"));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).expect_err("validation fails");
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_config_roundtrip() {
    let mut original = Config::default();
    original.api.timeout_seconds = Some(7);

    let serialized = toml::to_string(&original).expect("Should serialize");
    let deserialized: Config = toml::from_str(&serialized).expect("Should deserialize");

    assert_eq!(deserialized.api.base_url, original.api.base_url);
    assert_eq!(deserialized.api.timeout_seconds, Some(7));
    assert_eq!(deserialized.ui.tick_rate_ms, original.ui.tick_rate_ms);
}

#[test]
fn test_missing_key_names_the_env_var() {
    let api = ApiConfig {
        api_key: None,
        api_key_env: UNSET_ENV.to_string(),
        ..ApiConfig::default()
    };
    let source = ApiKeySource::from_config(&api);
    assert_eq!(source.env_var(), UNSET_ENV);
    match source.resolve() {
        CredentialStatus::Missing { reason } => assert!(reason.contains(source.env_var())),
        CredentialStatus::Configured(_) => panic!("no key should resolve"),
    }
}

#[test]
fn test_key_from_file_when_env_unset() {
    let api = ApiConfig {
        api_key: Some("file-key".to_string()),
        api_key_env: UNSET_ENV.to_string(),
        ..ApiConfig::default()
    };
    assert_eq!(resolved_key(&ApiKeySource::from_config(&api)).as_deref(), Some("file-key"));
}

#[test]
fn test_env_key_wins_over_file() {
    let env_var = "MOVIESEARCH_TEST_ENV_WINS";
    std::env::set_var(env_var, "env-key");
    let api = ApiConfig {
        api_key: Some("file-key".to_string()),
        api_key_env: env_var.to_string(),
        ..ApiConfig::default()
    };

    let source = ApiKeySource::from_config(&api);
    assert_eq!(resolved_key(&source).as_deref(), Some("env-key"));

    let source = source.with_override(Some("cli-key".to_string()));
    assert_eq!(resolved_key(&source).as_deref(), Some("cli-key"));
    std::env::remove_var(env_var);
}

#[test]
fn test_key_is_resolved_on_every_call() {
    let env_var = "MOVIESEARCH_TEST_LATE_EXPORT";
    std::env::remove_var(env_var);
    let api = ApiConfig {
        api_key_env: env_var.to_string(),
        ..ApiConfig::default()
    };
    let source = ApiKeySource::from_config(&api);
    assert!(resolved_key(&source).is_none());

    std::env::set_var(env_var, "exported-later");
    assert_eq!(resolved_key(&source).as_deref(), Some("exported-later"));
    std::env::remove_var(env_var);
}

#[test]
fn test_blank_keys_count_as_missing() {
    let api = ApiConfig {
        api_key: Some("   ".to_string()),
        api_key_env: UNSET_ENV.to_string(),
        ..ApiConfig::default()
    };
    let source = ApiKeySource::from_config(&api).with_override(Some(String::new()));

    match source.resolve() {
        CredentialStatus::Missing { reason } => assert!(reason.contains(UNSET_ENV)),
        CredentialStatus::Configured(_) => panic!("blank key must not count"),
    }
}

#[test]
fn test_secure_string_is_masked() {
    let api = ApiConfig {
        api_key: Some("super-secret".to_string()),
        api_key_env: UNSET_ENV.to_string(),
        ..ApiConfig::default()
    };
    let CredentialStatus::Configured(key) = ApiKeySource::from_config(&api).resolve() else {
        panic!("key expected");
    };
    assert!(!format!("{key:?}").contains("super-secret"));
    assert!(!format!("{key}").contains("super-secret"));
}
