//! Process configuration for Courier
//!
//! Configuration is resolved once at startup from the environment and then
//! passed by reference into every tool. Nothing in the tool code reads the
//! environment directly.

mod api_key;
mod configuration;
mod env_loader;
mod error;
pub mod timeouts;

pub use api_key::{ApiKey, mask_api_key};
pub use configuration::{Configuration, DEFAULT_BASE_URL};
pub use env_loader::{
    API_KEY_ENV, BASE_URL_ENV, REPLY_TO_ENV, SENDER_ENV, TIMEOUT_ENV, load_from_env,
    load_from_lookup, split_addresses,
};
pub use error::ConfigError;
