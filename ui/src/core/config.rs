//! Site configuration.
//!
//! Values are baked in at build time (`DENTALSITE_API_URL`, `DENTALSITE_CONFIG`)
//! because the WASM bundle has no process environment. Native builds also honour
//! the same variables at runtime so a packaged desktop build can be re-pointed
//! without recompiling.

use api::ApiClient;
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::warn;

use crate::navigation::scroll::RetryPolicy;

#[cfg(not(target_arch = "wasm32"))]
const API_URL_VAR: &str = "DENTALSITE_API_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub api_base_url: String,
    /// Height of the sticky header; section scrolls stop this far above the target.
    pub header_offset_px: f64,
    pub scroll_retry_attempts: u32,
    pub scroll_retry_interval_ms: u64,
    pub hero_interval_ms: u64,
    pub testimonial_interval_ms: u64,
    /// Pause after a manual carousel step before auto-advance resumes.
    pub manual_hold_ms: u64,
    pub feedback_reset_ms: u64,
    /// Show the submission confirmation even when the POST fails.
    pub mask_feedback_failures: bool,
    /// Swap entrance and slide transitions for static placement.
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
            header_offset_px: 80.0,
            scroll_retry_attempts: 20,
            scroll_retry_interval_ms: 100,
            hero_interval_ms: 5000,
            testimonial_interval_ms: 2500,
            manual_hold_ms: 1000,
            feedback_reset_ms: 3000,
            mask_feedback_failures: true,
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    /// Build-time configuration, then native runtime overrides.
    pub fn from_env() -> Self {
        let mut config = match option_env!("DENTALSITE_CONFIG") {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                warn!(%err, "ignoring malformed DENTALSITE_CONFIG");
                Self::default()
            }),
            None => Self::default(),
        };

        if let Some(url) = option_env!("DENTALSITE_API_URL") {
            config.api_base_url = url.to_string();
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var(API_URL_VAR) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }

        config
    }

    /// Partial JSON documents are allowed; unspecified keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.api_base_url.clone())
    }

    pub fn scroll_retry(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.scroll_retry_attempts,
            interval_ms: self.scroll_retry_interval_ms,
        }
    }
}

/// Installs the configuration and a matching API client for the subtree.
pub fn provide_site_config(config: SiteConfig) {
    let client = config.client();
    use_context_provider(|| config);
    use_context_provider(|| client);
}

pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_env)
}

pub fn use_api_client() -> ApiClient {
    let config = use_site_config();
    try_use_context::<ApiClient>().unwrap_or_else(|| config.client())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"api_base_url":"https://cms.example.com","header_offset_px":64}"#)
                .unwrap();
        assert_eq!(config.api_base_url, "https://cms.example.com");
        assert_eq!(config.header_offset_px, 64.0);
        assert_eq!(config.scroll_retry_attempts, 20);
        assert!(config.mask_feedback_failures);
    }

    #[test]
    fn retry_policy_follows_config() {
        let config = SiteConfig {
            scroll_retry_attempts: 5,
            scroll_retry_interval_ms: 50,
            ..SiteConfig::default()
        };
        let policy = config.scroll_retry();
        assert_eq!((policy.attempts, policy.interval_ms), (5, 50));
    }

    #[test]
    fn client_uses_configured_base() {
        let config = SiteConfig {
            api_base_url: "https://cms.example.com/".into(),
            ..SiteConfig::default()
        };
        assert_eq!(config.client().base_url(), "https://cms.example.com");
    }
}
