//! Outbound email delivery.
//!
//! The contact controller only knows the [`EmailTransport`] trait. The site
//! ships [`EmailJsTransport`], which talks to the hosted EmailJS REST API.

use crate::config::EmailJsConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const EMAILJS_SEND_PATH: &str = "/api/v1.0/email/send";

/// Template variables; names must match the `{{...}}` slots in the template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub website_url: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn new(config: &EmailJsConfig, template_params: TemplateParams) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params,
        }
    }
}

/// Wire body for `POST /api/v1.0/email/send`.
#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub text: String,
}

impl TransportResponse {
    /// The relay acknowledges with HTTP 200 or a literal `OK` body.
    pub fn is_ok(&self) -> bool {
        self.status == 200 || self.text == "OK"
    }
}

/// Failure reported by a transport. `status` is `None` when no HTTP response
/// was received at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportError {
    pub status: Option<u16>,
    pub text: Option<String>,
}

impl TransportError {
    pub fn network(text: impl Into<String>) -> Self {
        Self {
            status: None,
            text: Some(text.into()),
        }
    }

    pub fn http(status: u16, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            status: Some(status),
            text: (!text.trim().is_empty()).then_some(text),
        }
    }

    /// A response arrived but was not an acknowledgment.
    pub fn unacknowledged(response: &TransportResponse) -> Self {
        Self {
            status: Some(response.status),
            text: Some("Failed to send email".to_string()),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.text.as_deref()) {
            (Some(s), Some(t)) => write!(f, "transport error (status {s}): {t}"),
            (Some(s), None) => write!(f, "transport error (status {s})"),
            (None, Some(t)) => write!(f, "transport error: {t}"),
            (None, None) => write!(f, "transport error"),
        }
    }
}

impl std::error::Error for TransportError {}

#[async_trait(?Send)]
pub trait EmailTransport {
    async fn send(&self, request: &EmailRequest) -> Result<TransportResponse, TransportError>;
}

/// EmailJS over `reqwest` (browser `fetch` on wasm32).
pub struct EmailJsTransport {
    client: reqwest::Client,
    url: String,
}

impl EmailJsTransport {
    pub fn new(config: &EmailJsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &EmailJsConfig) -> Self {
        let url = format!(
            "{}{}",
            config.endpoint.trim_end_matches('/'),
            EMAILJS_SEND_PATH
        );
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl EmailTransport for EmailJsTransport {
    async fn send(&self, request: &EmailRequest) -> Result<TransportResponse, TransportError> {
        let body = SendBody {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.template_params,
        };
        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| match e.status() {
                Some(s) => TransportError::http(s.as_u16(), e.to_string()),
                None => TransportError::network(e.to_string()),
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;
        log::debug!("[transport] emailjs status={} body={:?}", status.as_u16(), text);

        if status.is_success() {
            Ok(TransportResponse {
                status: status.as_u16(),
                text,
            })
        } else {
            Err(TransportError::http(status.as_u16(), text))
        }
    }
}
