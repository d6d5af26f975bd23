//! Environment variable-based configuration loading

use std::env;
use std::time::Duration;

use tracing::{debug, warn};

use super::api_key::ApiKey;
use super::configuration::{Configuration, DEFAULT_BASE_URL};
use super::error::ConfigError;
use super::timeouts;

/// Provider credential
pub const API_KEY_ENV: &str = "RESEND_API_KEY";
/// Default sender address
pub const SENDER_ENV: &str = "SENDER_EMAIL_ADDRESS";
/// Comma-separated default reply-to addresses
pub const REPLY_TO_ENV: &str = "REPLY_TO_EMAIL_ADDRESSES";
/// Provider base URL override
pub const BASE_URL_ENV: &str = "RESEND_BASE_URL";
/// Provider request timeout in seconds
pub const TIMEOUT_ENV: &str = "RESEND_TIMEOUT_SECS";

/// Load configuration from the process environment
pub fn load_from_env() -> Result<Configuration, ConfigError> {
    load_from_lookup(|name| env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Empty values are treated the same as unset ones.
pub fn load_from_lookup<F>(lookup: F) -> Result<Configuration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let credential = get(API_KEY_ENV).and_then(ApiKey::new);
    if credential.is_none() {
        warn!(
            "No API key provided. Please set {} environment variable",
            API_KEY_ENV
        );
    }

    let default_sender = get(SENDER_ENV).map(|sender| sender.trim().to_string());
    let default_reply_to = get(REPLY_TO_ENV)
        .map(|raw| split_addresses(&raw))
        .unwrap_or_default();

    let base_url = get(BASE_URL_ENV)
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let request_timeout = match get(TIMEOUT_ENV) {
        Some(raw) => {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ConfigError::invalid_value(TIMEOUT_ENV, &raw, "expected a whole number of seconds")
            })?;
            if secs == 0 {
                return Err(ConfigError::invalid_value(
                    TIMEOUT_ENV,
                    &raw,
                    "timeout must be greater than zero",
                ));
            }
            Duration::from_secs(secs)
        }
        None => timeouts::provider_request_timeout(),
    };

    debug!(
        has_credential = credential.is_some(),
        default_sender = ?default_sender,
        default_reply_to = default_reply_to.len(),
        base_url = %base_url,
        "Resolved configuration"
    );

    Ok(Configuration {
        credential,
        default_sender,
        default_reply_to,
        base_url,
        request_timeout,
    })
}

impl Configuration {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        load_from_env()
    }

    /// Resolve configuration through a custom variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        load_from_lookup(lookup)
    }
}

/// Split a comma-separated address list, dropping blank segments.
///
/// A value made only of separators (`","`) therefore yields no defaults,
/// which keeps `replyTo` in the caller-facing contract.
pub fn split_addresses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_split_reply_to_addresses() {
        assert_eq!(
            split_addresses("a@x.com,b@x.com"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
        assert_eq!(
            split_addresses(" a@x.com , ,b@x.com,"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
        assert!(split_addresses("").is_empty());
        assert!(split_addresses(" , ,").is_empty());
    }

    #[test]
    fn test_load_full_configuration() {
        let config = load_from_lookup(lookup_from(&[
            (API_KEY_ENV, "re_test_key_1234567890"),
            (SENDER_ENV, "noreply@acme.com"),
            (REPLY_TO_ENV, "a@x.com,b@x.com"),
            (BASE_URL_ENV, "http://localhost:9000/"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();

        assert!(config.has_credential());
        assert_eq!(config.default_sender.as_deref(), Some("noreply@acme.com"));
        assert_eq!(config.default_reply_to, vec!["a@x.com", "b@x.com"]);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_credential_is_not_an_error() {
        let config = Configuration::from_lookup(lookup_from(&[])).unwrap();

        assert!(!config.has_credential());
        assert!(config.default_sender.is_none());
        assert!(config.default_reply_to.is_empty());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, timeouts::provider_request_timeout());
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = load_from_lookup(lookup_from(&[
            (API_KEY_ENV, ""),
            (SENDER_ENV, ""),
            (REPLY_TO_ENV, ""),
        ]))
        .unwrap();

        assert!(!config.has_credential());
        assert!(config.default_sender.is_none());
        assert!(config.default_reply_to.is_empty());
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let err = load_from_lookup(lookup_from(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));

        let err = load_from_lookup(lookup_from(&[(TIMEOUT_ENV, "0")])).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        unsafe {
            env::set_var(API_KEY_ENV, "re_env_test_key_123456");
            env::set_var(REPLY_TO_ENV, "a@x.com,b@x.com");
            env::remove_var(SENDER_ENV);
        }

        let config = load_from_env().unwrap();
        assert!(config.has_credential());
        assert!(config.default_sender.is_none());
        assert_eq!(config.default_reply_to, vec!["a@x.com", "b@x.com"]);

        unsafe {
            env::remove_var(API_KEY_ENV);
            env::remove_var(REPLY_TO_ENV);
        }
    }
}
