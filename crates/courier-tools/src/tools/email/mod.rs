//! `send-email` tool
//!
//! The contract is chosen once from configuration, arguments are conformed
//! to it, then merged with the configured defaults into a [`SendRequest`]
//! and dispatched.
//!
//! [`SendRequest`]: crate::resend::SendRequest

mod contract;
mod normalize;
mod tool;


pub use contract::{ReplyToPolicy, SendEmailContract, SenderPolicy, build_send_schema};
pub use normalize::normalize_send;
pub use tool::SendEmailTool;
