//! HTTP client for the Resend REST API

use async_trait::async_trait;
use courier_core::config::{ApiKey, Configuration, timeouts};
use courier_core::tools::ToolError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, trace};

use super::types::{AudienceList, SendEmailResponse, SendRequest};
use crate::tools::credential::missing_credential;

const LIST_FAILED: &str = "Failed to list audiences";
const SEND_FAILED: &str = "Email failed to send";

/// Operations Courier needs from the email provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// List all audiences
    async fn list_audiences(&self) -> Result<AudienceList, ToolError>;

    /// Submit a normalized send request
    async fn send_email(&self, request: &SendRequest) -> Result<SendEmailResponse, ToolError>;
}

/// Resend API client
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<ApiKey>,
}

impl ResendClient {
    /// Build a client from resolved configuration.
    ///
    /// A missing credential is not an error here; every call fails with
    /// [`ToolError::Configuration`] instead, without touching the network.
    pub fn new(config: &Configuration) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(timeouts::provider_connect_timeout())
            .user_agent(concat!("courier/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.credential.clone(),
        })
    }

    fn api_key(&self) -> Result<&ApiKey, ToolError> {
        self.api_key.as_ref().ok_or_else(missing_credential)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn finish<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
        failure: &str,
    ) -> Result<T, ToolError> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(failure, &e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(failure, &e))?;

        debug!(status = %status, bytes = body.len(), "Provider responded");
        trace!(body = %body, "Provider response body");

        interpret_response(status, &body, failure)
    }
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn list_audiences(&self) -> Result<AudienceList, ToolError> {
        let api_key = self.api_key()?;
        let url = self.url("audiences");
        debug!(url = %url, "GET audiences");

        let request = self.http.get(&url).bearer_auth(api_key.expose());
        Self::finish(request, LIST_FAILED).await
    }

    async fn send_email(&self, request: &SendRequest) -> Result<SendEmailResponse, ToolError> {
        let api_key = self.api_key()?;
        let url = self.url("emails");
        debug!(url = %url, to = %request.to, "POST email");

        let request = self.http.post(&url).bearer_auth(api_key.expose()).json(request);
        Self::finish(request, SEND_FAILED).await
    }
}

/// Translate a provider reply into data or a provider error.
///
/// A non-null `error` member is authoritative even on a 2xx status. Any
/// other non-2xx reply fails with the whole body as details.
pub fn interpret_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    failure: &str,
) -> Result<T, ToolError> {
    let payload = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
    };

    if let Some(error) = payload.get("error").filter(|error| !error.is_null()) {
        return Err(ToolError::provider(failure, error.clone()));
    }

    if !status.is_success() {
        let details = match payload {
            Value::Null => json!({
                "statusCode": status.as_u16(),
                "message": status.canonical_reason().unwrap_or("Unknown status"),
            }),
            other => other,
        };
        return Err(ToolError::provider(failure, details));
    }

    serde_json::from_value(payload.clone()).map_err(|e| {
        ToolError::provider(
            failure,
            json!({ "message": format!("Unexpected response: {}", e), "body": payload }),
        )
    })
}

fn transport_error(failure: &str, err: &reqwest::Error) -> ToolError {
    let name = if err.is_timeout() {
        "timeout_error"
    } else if err.is_connect() {
        "connection_error"
    } else {
        "transport_error"
    };
    ToolError::provider(failure, json!({ "name": name, "message": err.to_string() }))
}
