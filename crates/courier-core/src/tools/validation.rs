//! Contract-boundary validation
//!
//! Arguments are conformed to a [`ToolSchema`] before a tool sees them:
//! unknown keys are dropped, required keys must be present, and value shapes
//! and constraints are checked. Every problem is reported in one
//! [`ToolError::Validation`] naming the offending fields.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::base::ToolError;
use super::types::{ParameterType, ToolCall, ToolParameter, ToolSchema};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Check email address syntax.
///
/// The local part may not start with a dot or contain consecutive dots.
pub fn is_valid_email(address: &str) -> bool {
    !address.starts_with('.') && !address.contains("..") && EMAIL_PATTERN.is_match(address)
}

impl ToolSchema {
    /// Conform a call's arguments to this contract
    pub fn conform(&self, call: &ToolCall) -> Result<ToolCall, ToolError> {
        let mut problems = Vec::new();
        let mut arguments = HashMap::new();

        for param in &self.parameters {
            match call.arguments.get(&param.name) {
                None | Some(Value::Null) => {
                    if param.required {
                        problems.push(format!("'{}' is required", param.name));
                    }
                }
                Some(value) => match check_value(param, value) {
                    Ok(()) => {
                        arguments.insert(param.name.clone(), value.clone());
                    }
                    Err(problem) => problems.push(problem),
                },
            }
        }

        for key in call.arguments.keys() {
            if self.field(key).is_none() {
                debug!(tool = %self.name, argument = %key, "Dropping argument not in contract");
            }
        }

        if problems.is_empty() {
            Ok(ToolCall {
                id: call.id.clone(),
                name: call.name.clone(),
                arguments,
            })
        } else {
            Err(ToolError::Validation(problems.join("; ")))
        }
    }
}

fn check_value(param: &ToolParameter, value: &Value) -> Result<(), String> {
    match param.param_type {
        ParameterType::String => {
            let s = value
                .as_str()
                .ok_or_else(|| format!("'{}' must be a string", param.name))?;
            check_string(param, &param.name, s)
        }
        ParameterType::StringArray => {
            let items = value
                .as_array()
                .ok_or_else(|| format!("'{}' must be an array of strings", param.name))?;
            for (index, item) in items.iter().enumerate() {
                let label = format!("{}[{}]", param.name, index);
                let s = item
                    .as_str()
                    .ok_or_else(|| format!("'{}' must be a string", label))?;
                check_string(param, &label, s)?;
            }
            Ok(())
        }
    }
}

fn check_string(param: &ToolParameter, label: &str, value: &str) -> Result<(), String> {
    if param.non_empty && value.is_empty() {
        return Err(format!("'{}' must not be empty", label));
    }
    if param.email && !is_valid_email(value) {
        return Err(format!("'{}' must be a valid email address, got '{}'", label, value));
    }
    Ok(())
}
