//! Resend request and response types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET /audiences` response body, kept verbatim.
///
/// Audiences are opaque beyond listing, so nothing is modelled and nothing
/// the provider adds is lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudienceList(pub Value);

impl AudienceList {
    /// Number of entries in `data`; zero when the member is missing
    pub fn len(&self) -> usize {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `POST /emails` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub id: String,
    /// Members other than `id`, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SendEmailResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}

/// Reply-to addresses: the provider accepts a single address or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyTo {
    Single(String),
    Many(Vec<String>),
}

/// A provider-ready send request
///
/// `from` and `reply_to` are always populated. Optional fields are absent
/// from the serialized body unless they were set through the builder.
/// Serializes with the provider's snake_case keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub reply_to: ReplyTo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
}

impl SendRequest {
    /// Start a request from its always-present fields
    pub fn builder(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
        reply_to: ReplyTo,
    ) -> SendRequestBuilder {
        SendRequestBuilder {
            request: SendRequest {
                from: from.into(),
                to: to.into(),
                subject: subject.into(),
                text: text.into(),
                reply_to,
                html: None,
                scheduled_at: None,
                cc: None,
                bcc: None,
            },
        }
    }
}

/// Builder for [`SendRequest`]; each setter is called only for supplied fields
#[derive(Debug, Clone)]
pub struct SendRequestBuilder {
    request: SendRequest,
}

impl SendRequestBuilder {
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.request.html = Some(html.into());
        self
    }

    pub fn scheduled_at(mut self, when: impl Into<String>) -> Self {
        self.request.scheduled_at = Some(when.into());
        self
    }

    pub fn cc(mut self, cc: Vec<String>) -> Self {
        self.request.cc = Some(cc);
        self
    }

    pub fn bcc(mut self, bcc: Vec<String>) -> Self {
        self.request.bcc = Some(bcc);
        self
    }

    pub fn build(self) -> SendRequest {
        self.request
    }
}
