//! Contract derivation for `send-email`

use courier_core::config::Configuration;
use courier_core::tools::{ToolAnnotations, ToolParameter, ToolSchema};

pub(super) const NAME: &str = "send-email";
pub(super) const DESCRIPTION: &str = "Send an email using Resend";
const TITLE: &str = "Send Email via Resend";

/// Where the sender address comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderPolicy {
    /// A default sender is configured; the contract has no `from`
    Configured,
    /// The caller must supply `from`
    Caller,
}

/// Where the reply-to addresses come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyToPolicy {
    /// Default reply-to addresses are configured; the contract has no `replyTo`
    Configured,
    /// The caller may supply `replyTo`
    Caller,
}

/// One of the four `send-email` contract shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendEmailContract {
    pub sender: SenderPolicy,
    pub reply_to: ReplyToPolicy,
}

impl SendEmailContract {
    /// Select the shape from configured defaults
    pub fn from_config(config: &Configuration) -> Self {
        let sender = match config.default_sender {
            Some(_) => SenderPolicy::Configured,
            None => SenderPolicy::Caller,
        };
        let reply_to = if config.default_reply_to.is_empty() {
            ReplyToPolicy::Caller
        } else {
            ReplyToPolicy::Configured
        };
        Self { sender, reply_to }
    }

    /// The accepted-parameter contract for this shape
    pub fn schema(&self) -> ToolSchema {
        let mut parameters = vec![
            ToolParameter::string("to", "Recipient email address").email(),
            ToolParameter::string("subject", "Email subject line").non_empty(),
            ToolParameter::string("text", "Plain text email content").non_empty(),
            ToolParameter::optional_string(
                "html",
                "HTML email content. When provided, the plain text argument MUST be provided as well.",
            ),
            ToolParameter::string_array(
                "cc",
                "Optional array of CC email addresses. You MUST ask the user for this parameter. Under no circumstance provide it yourself",
            )
            .email(),
            ToolParameter::string_array(
                "bcc",
                "Optional array of BCC email addresses. You MUST ask the user for this parameter. Under no circumstance provide it yourself",
            )
            .email(),
            ToolParameter::optional_string(
                "scheduledAt",
                "Optional parameter to schedule the email. This uses natural language. Examples would be 'tomorrow at 10am' or 'in 2 hours' or 'next day at 9am PST' or 'Friday at 3pm ET'.",
            ),
        ];

        if self.sender == SenderPolicy::Caller {
            parameters.push(
                ToolParameter::string(
                    "from",
                    "Sender email address. You MUST ask the user for this parameter. Under no circumstance provide it yourself",
                )
                .email()
                .non_empty(),
            );
        }

        if self.reply_to == ReplyToPolicy::Caller {
            parameters.push(
                ToolParameter::string_array(
                    "replyTo",
                    "Optional email addresses for the email readers to reply to. You MUST ask the user for this parameter. Under no circumstance provide it yourself",
                )
                .email(),
            );
        }

        ToolSchema::new(NAME, DESCRIPTION, parameters)
            .with_annotations(ToolAnnotations::write(TITLE))
    }
}

/// Contract for `send-email` under the given configuration
pub fn build_send_schema(config: &Configuration) -> ToolSchema {
    SendEmailContract::from_config(config).schema()
}
