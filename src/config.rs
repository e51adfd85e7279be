use crate::constants::SITE_CONFIG_ID;
use portfolio_core::{EmailJsConfig, SiteConfig};
use web_sys as web;

// Build-time fallbacks: PORTFOLIO_EMAILJS_SERVICE_ID=... wasm-pack build
const ENV_SERVICE_ID: Option<&str> = option_env!("PORTFOLIO_EMAILJS_SERVICE_ID");
const ENV_TEMPLATE_ID: Option<&str> = option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID");
const ENV_PUBLIC_KEY: Option<&str> = option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY");

fn from_build_env() -> SiteConfig {
    let defaults = EmailJsConfig::default();
    SiteConfig {
        emailjs: EmailJsConfig {
            service_id: ENV_SERVICE_ID.map_or(defaults.service_id.clone(), str::to_string),
            template_id: ENV_TEMPLATE_ID.map_or(defaults.template_id.clone(), str::to_string),
            public_key: ENV_PUBLIC_KEY.map_or(defaults.public_key.clone(), str::to_string),
            endpoint: defaults.endpoint,
        },
        site_url: None,
    }
}

/// Read the inline JSON config block, falling back to build-time values.
///
/// An unconfigured result is not an error here; the contact form reports it
/// when someone tries to submit.
pub fn load(document: &web::Document) -> SiteConfig {
    let inline = document
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let config = match inline {
        Some(json) => match SiteConfig::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("[config] ignoring #{}: {}", SITE_CONFIG_ID, e);
                from_build_env()
            }
        },
        None => from_build_env(),
    };

    if !config.emailjs.is_configured() {
        log::warn!("[config] EmailJS credentials missing; contact form will refuse to send");
    }
    config
}
