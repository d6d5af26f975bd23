//! Merge caller arguments with configured defaults

use std::collections::HashMap;

use courier_core::config::Configuration;
use courier_core::tools::ToolError;
use serde_json::Value;
use tracing::{debug, trace};

use crate::resend::{ReplyTo, SendRequest};
use crate::tools::credential::require_credential;

/// Build a provider-ready request from caller arguments and configuration.
///
/// Caller values take precedence over defaults. `html`, `scheduledAt`, `cc`
/// and `bcc` appear in the result only when supplied; blank `html` and
/// `scheduledAt` count as not supplied.
pub fn normalize_send(
    raw: &HashMap<String, Value>,
    config: &Configuration,
) -> Result<SendRequest, ToolError> {
    require_credential(config)?;

    let from = match supplied(raw, "from") {
        Some(value) => value.as_str().map(str::to_string),
        None => config.default_sender.clone(),
    }
    .ok_or_else(|| ToolError::MissingField("from argument must be provided.".to_string()))?;

    let reply_to = match supplied(raw, "replyTo") {
        Some(value) => reply_to_from(value),
        None => Some(ReplyTo::Many(config.default_reply_to.clone())),
    }
    .ok_or_else(|| ToolError::MissingField("replyTo argument must be provided.".to_string()))?;

    let to = required_string(raw, "to")?;
    let subject = required_string(raw, "subject")?;
    let text = required_string(raw, "text")?;

    debug!(from = %from, "Sending email with from: {}", from);

    let mut builder = SendRequest::builder(from, to, subject, text, reply_to);
    if let Some(html) = optional_string(raw, "html")? {
        builder = builder.html(html);
    }
    if let Some(when) = optional_string(raw, "scheduledAt")? {
        builder = builder.scheduled_at(when);
    }
    if let Some(cc) = optional_list(raw, "cc")? {
        builder = builder.cc(cc);
    }
    if let Some(bcc) = optional_list(raw, "bcc")? {
        builder = builder.bcc(bcc);
    }
    let request = builder.build();

    trace!(request = ?request, "Email request");
    Ok(request)
}

fn supplied<'a>(raw: &'a HashMap<String, Value>, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|value| !value.is_null())
}

fn reply_to_from(value: &Value) -> Option<ReplyTo> {
    match value {
        Value::String(address) => Some(ReplyTo::Single(address.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(ReplyTo::Many),
        _ => None,
    }
}

fn required_string(raw: &HashMap<String, Value>, key: &str) -> Result<String, ToolError> {
    supplied(raw, key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ToolError::Validation(format!("'{}' is required and must be a string", key)))
}

fn optional_string(raw: &HashMap<String, Value>, key: &str) -> Result<Option<String>, ToolError> {
    match supplied(raw, key) {
        None => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ToolError::Validation(format!("'{}' must be a string", key))),
    }
}

fn optional_list(raw: &HashMap<String, Value>, key: &str) -> Result<Option<Vec<String>>, ToolError> {
    let Some(value) = supplied(raw, key) else {
        return Ok(None);
    };
    value
        .as_array()
        .and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .map(Some)
        .ok_or_else(|| ToolError::Validation(format!("'{}' must be an array of strings", key)))
}
