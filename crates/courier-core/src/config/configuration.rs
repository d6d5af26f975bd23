//! Resolved process configuration

use std::time::Duration;

use super::api_key::ApiKey;
use super::timeouts;

/// Default Resend API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Settings resolved once at process start.
///
/// Immutable after construction; tools hold it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Provider credential. `None` disables both operations.
    pub credential: Option<ApiKey>,
    /// Sender used when the caller is not asked for one
    pub default_sender: Option<String>,
    /// Reply-to addresses used when the caller is not asked for them
    pub default_reply_to: Vec<String>,
    /// Provider API base URL
    pub base_url: String,
    /// Per-request timeout for provider calls
    pub request_timeout: Duration,
}

impl Configuration {
    /// Create a configuration with the given credential and no defaults
    pub fn new(credential: Option<ApiKey>) -> Self {
        Self {
            credential,
            default_sender: None,
            default_reply_to: Vec::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: timeouts::provider_request_timeout(),
        }
    }

    /// Set the default sender
    pub fn with_default_sender(mut self, sender: impl Into<String>) -> Self {
        self.default_sender = Some(sender.into());
        self
    }

    /// Set the default reply-to addresses
    pub fn with_default_reply_to<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_reply_to = addresses.into_iter().map(Into::into).collect();
        self
    }

    /// Set the provider base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the provider request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Whether a provider credential is available
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(None)
    }
}
