//! Integration tests for configuration resolution.
//!
//! Resolution from the environment is mostly exercised through
//! `build_with_lookup`; a single test sets the real variables.

use spacelift::config::{ENV_BASE_URL, ENV_KEY_ID, ENV_KEY_SECRET};
use spacelift::{ConfigError, Spacelift, SpaceliftConfig, SpaceliftError};
use std::collections::HashMap;
use std::time::Duration;

fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_config_from_environment_only() {
    let vars = env(&[
        (ENV_BASE_URL, "https://acme.app.spacelift.io/graphql"),
        (ENV_KEY_ID, "env-key"),
        (ENV_KEY_SECRET, "env-secret"),
    ]);

    let config = SpaceliftConfig::builder()
        .build_with_lookup(|name| vars.get(name).cloned())
        .unwrap();

    assert_eq!(
        config.base_url().as_ref(),
        "https://acme.app.spacelift.io/graphql"
    );
    assert_eq!(config.key_id().as_ref(), "env-key");
    assert_eq!(config.key_secret().as_ref(), "env-secret");
}

#[test]
fn test_explicit_values_take_precedence() {
    let vars = env(&[
        (ENV_BASE_URL, "https://env.app.spacelift.io/graphql"),
        (ENV_KEY_ID, "env-key"),
        (ENV_KEY_SECRET, "env-secret"),
    ]);

    let config = SpaceliftConfig::builder()
        .base_url("https://explicit.app.spacelift.io/graphql")
        .key_id("explicit-key")
        .build_with_lookup(|name| vars.get(name).cloned())
        .unwrap();

    assert_eq!(config.base_url().host_name(), "explicit.app.spacelift.io");
    assert_eq!(config.key_id().as_ref(), "explicit-key");
    assert_eq!(config.key_secret().as_ref(), "env-secret");
}

#[test]
fn test_empty_explicit_value_falls_back_to_environment() {
    let vars = env(&[(ENV_KEY_ID, "env-key")]);

    let config = SpaceliftConfig::builder()
        .base_url("https://acme.app.spacelift.io/graphql")
        .key_id("")
        .key_secret("secret")
        .build_with_lookup(|name| vars.get(name).cloned())
        .unwrap();

    assert_eq!(config.key_id().as_ref(), "env-key");
}

#[test]
fn test_build_with_env_reads_process_environment() {
    // The only test in this binary that touches the process environment
    std::env::set_var(ENV_BASE_URL, "https://env.app.spacelift.io/graphql");
    std::env::set_var(ENV_KEY_ID, "process-key");
    std::env::set_var(ENV_KEY_SECRET, "process-secret");

    let config = SpaceliftConfig::builder()
        .key_secret("explicit-secret")
        .build_with_env()
        .unwrap();
    let from_env = SpaceliftConfig::from_env().unwrap();
    let client = Spacelift::from_env().unwrap();

    std::env::remove_var(ENV_BASE_URL);
    std::env::remove_var(ENV_KEY_ID);
    std::env::remove_var(ENV_KEY_SECRET);

    assert_eq!(config.base_url().host_name(), "env.app.spacelift.io");
    assert_eq!(config.key_id().as_ref(), "process-key");
    assert_eq!(config.key_secret().as_ref(), "explicit-secret");
    assert_eq!(from_env.key_secret().as_ref(), "process-secret");
    assert_eq!(client.config().key_id().as_ref(), "process-key");

    assert!(matches!(
        Spacelift::from_env(),
        Err(SpaceliftError::Config(ConfigError::MissingParams { .. }))
    ));
}

#[test]
fn test_missing_params_are_all_named() {
    let vars = env(&[(ENV_KEY_ID, "env-key"), (ENV_KEY_SECRET, "")]);

    let result = SpaceliftConfig::builder().build_with_lookup(|name| vars.get(name).cloned());

    assert_eq!(
        result.unwrap_err(),
        ConfigError::MissingParams {
            params: vec!["base_url", "key_secret"]
        }
    );
}

#[test]
fn test_missing_params_message() {
    let error = SpaceliftConfig::builder().build().unwrap_err();
    let message = error.to_string();

    assert!(message.starts_with("Invalid spacelift params"));
    assert!(message.contains("base_url"));
    assert!(message.contains("key_id"));
    assert!(message.contains("key_secret"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = SpaceliftConfig::builder()
        .base_url("acme.app.spacelift.io")
        .key_id("key")
        .key_secret("secret")
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}

#[test]
fn test_timeout_and_user_agent_prefix() {
    let config = SpaceliftConfig::builder()
        .base_url("https://acme.app.spacelift.io/graphql")
        .key_id("key")
        .key_secret("secret")
        .timeout(Duration::from_secs(5))
        .user_agent_prefix("drift-detector/2.1")
        .build()
        .unwrap();

    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.user_agent_prefix(), Some("drift-detector/2.1"));
}

// ============================================================================
// Secrets
// ============================================================================

#[test]
fn test_debug_output_masks_secret() {
    let builder = SpaceliftConfig::builder().key_secret("super-secret-value");
    assert!(!format!("{builder:?}").contains("super-secret-value"));

    let config = SpaceliftConfig::builder()
        .base_url("https://acme.app.spacelift.io/graphql")
        .key_id("key")
        .key_secret("super-secret-value")
        .build()
        .unwrap();
    assert!(!format!("{config:?}").contains("super-secret-value"));
}

// ============================================================================
// Client construction
// ============================================================================

#[test]
fn test_config_error_converts_into_client_error() {
    let result = SpaceliftConfig::builder()
        .build()
        .map_err(SpaceliftError::from)
        .and_then(Spacelift::new);

    assert!(matches!(
        result,
        Err(SpaceliftError::Config(ConfigError::MissingParams { .. }))
    ));
}
