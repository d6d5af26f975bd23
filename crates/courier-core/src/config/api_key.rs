//! Provider credential wrapper

use std::fmt;

/// Provider API key.
///
/// `Debug` and `Display` only ever show the masked form so the credential
/// cannot end up in logs or error messages by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Returns `None` for empty input, which counts as absent.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// The raw key, for building the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Display-safe version of the key
    pub fn masked(&self) -> String {
        mask_api_key(&self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self.masked())
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Mask an API key, keeping a short prefix and suffix for identification
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 12 {
        return "*".repeat(len);
    }

    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    let mask_len = len - 10;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}
