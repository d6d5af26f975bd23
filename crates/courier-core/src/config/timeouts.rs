//! Default timeout values for provider calls

use std::time::Duration;

/// Default timeout for a single provider HTTP request (30 seconds)
pub const PROVIDER_REQUEST_SECS: u64 = 30;

/// Default connect timeout for the provider (10 seconds)
pub const PROVIDER_CONNECT_SECS: u64 = 10;

/// Get provider request timeout as Duration
pub fn provider_request_timeout() -> Duration {
    Duration::from_secs(PROVIDER_REQUEST_SECS)
}

/// Get provider connect timeout as Duration
pub fn provider_connect_timeout() -> Duration {
    Duration::from_secs(PROVIDER_CONNECT_SECS)
}
