//! Resend API adapter
//!
//! [`EmailProvider`] is the seam between the tools and the provider;
//! [`ResendClient`] is the HTTP implementation.

mod client;
mod types;

#[cfg(test)]
pub use client::MockEmailProvider;
pub use client::{EmailProvider, ResendClient, interpret_response};
pub use types::{AudienceList, ReplyTo, SendEmailResponse, SendRequest, SendRequestBuilder};
