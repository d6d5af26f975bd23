//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(about = "Courier - MCP tool server for sending email through Resend")]
#[command(
    long_about = r#"Courier - MCP tool server for sending email through Resend

USAGE:
  courier                        # Serve MCP over stdio
  courier serve                  # Same as above
  courier tools                  # Print the tool contracts as JSON

ENVIRONMENT:
  RESEND_API_KEY                 Provider credential (required for tool calls)
  SENDER_EMAIL_ADDRESS           Default sender; hides the `from` parameter
  REPLY_TO_EMAIL_ADDRESSES       Comma-separated defaults; hides `replyTo`
  RESEND_BASE_URL                API endpoint (default https://api.resend.com)
  RESEND_TIMEOUT_SECS            Request timeout in seconds (default 30)"#
)]
#[command(version)]
pub struct Cli {
    /// Load environment variables from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Log output format (logs always go to stderr)
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Serve the tools over MCP on stdin/stdout
    Serve,

    /// Print the tool contracts resolved from the current environment
    Tools,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}
