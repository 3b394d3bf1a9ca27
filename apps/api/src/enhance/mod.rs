//! Enhancement client — the single point of entry for AI text enhancement.
//!
//! Sends `{section, content}` to the backend and expects
//! `{enhancedContent}` back. Any transport error or non-success status
//! degrades to the deterministic canned text, so callers always get a
//! result; the outcome records which path produced it.

pub mod fallback;
pub mod handlers;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const ENHANCE_PATH: &str = "/ai-enhance";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct EnhanceRequest<'a> {
    section: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnhanceResponse {
    enhanced_content: String,
}

/// Where an enhancement result came from: the live service, or the local
/// canned substitute after a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceOutcome {
    Service(String),
    Fallback(String),
}

impl EnhanceOutcome {
    pub fn text(&self) -> &str {
        match self {
            EnhanceOutcome::Service(t) | EnhanceOutcome::Fallback(t) => t,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, EnhanceOutcome::Fallback(_))
    }
}

#[derive(Clone)]
pub struct EnhanceClient {
    client: Client,
    base_url: String,
}

impl EnhanceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Always resolves to some text. Service failures are logged and
    /// replaced by the canned fallback rather than propagated.
    pub async fn enhance(&self, section: &str, content: &str) -> EnhanceOutcome {
        match self.call(section, content).await {
            Ok(text) => {
                debug!("Enhancement service responded for section '{section}'");
                EnhanceOutcome::Service(text)
            }
            Err(e) => {
                warn!("Enhancement service unavailable, using canned fallback: {e}");
                EnhanceOutcome::Fallback(fallback::canned(section, content))
            }
        }
    }

    async fn call(&self, section: &str, content: &str) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .post(format!("{}{ENHANCE_PATH}", self.base_url))
            .json(&EnhanceRequest { section, content })
            .send()
            .await?
            .error_for_status()?;

        let body: EnhanceResponse = response.json().await?;
        Ok(body.enhanced_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_canned_text() {
        // port 9 (discard) is closed; the connection fails immediately
        let client = EnhanceClient::new("http://127.0.0.1:9".to_string());
        let outcome = client.enhance("summary", "whatever").await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.text(), fallback::canned("summary", "whatever"));
    }

    #[tokio::test]
    async fn test_unknown_section_fallback_wraps_the_content() {
        let client = EnhanceClient::new("http://127.0.0.1:9".to_string());
        let outcome = client.enhance("foo", "bar").await;
        assert_eq!(
            outcome.text(),
            "Enhanced: bar - Improved with advanced AI techniques for better impact and \
             professional presentation."
        );
    }
}
