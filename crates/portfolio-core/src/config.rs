//! Site configuration: EmailJS credentials and the site's own address.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com";

pub const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

// Sent as `website_url` when the page origin cannot be read.
pub const FALLBACK_SITE_NAME: &str = "Portfolio Website";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: PLACEHOLDER_SERVICE_ID.to_string(),
            template_id: PLACEHOLDER_TEMPLATE_ID.to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
        }
    }
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            ..Self::default()
        }
    }

    /// All three identifiers are set to something other than a placeholder.
    pub fn is_configured(&self) -> bool {
        let set = |value: &str, placeholder: &str| {
            let v = value.trim();
            !v.is_empty() && v != placeholder
        };
        set(&self.service_id, PLACEHOLDER_SERVICE_ID)
            && set(&self.template_id, PLACEHOLDER_TEMPLATE_ID)
            && set(&self.public_key, PLACEHOLDER_PUBLIC_KEY)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub emailjs: EmailJsConfig,
    /// Origin reported to the email template; `None` means ask the page.
    pub site_url: Option<String>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
