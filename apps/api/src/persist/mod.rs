//! Persistence client: ships the full resume to the backend store.
//!
//! Transport and server failures are masked by a mock-success receipt.
//! That mirrors the product's demo behavior; the outcome type keeps the
//! two paths distinguishable so a non-demo caller can propagate instead.

pub mod handlers;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::resume::Resume;

const SAVE_PATH: &str = "/save-resume";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub success: bool,
    pub message: String,
}

/// The receipt reported when the backend could not be reached.
pub fn mock_receipt() -> SaveReceipt {
    SaveReceipt {
        success: true,
        message: "Resume saved successfully (mock)".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Service(SaveReceipt),
    Fallback(SaveReceipt),
}

impl SaveOutcome {
    pub fn receipt(&self) -> &SaveReceipt {
        match self {
            SaveOutcome::Service(r) | SaveOutcome::Fallback(r) => r,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SaveOutcome::Fallback(_))
    }
}

#[derive(Clone)]
pub struct SaveClient {
    client: Client,
    base_url: String,
}

impl SaveClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Always resolves to a receipt. A failed call yields the mock-success
    /// receipt, logged at warn.
    pub async fn save(&self, resume: &Resume) -> SaveOutcome {
        match self.call(resume).await {
            Ok(receipt) => {
                debug!("Save service acknowledged: {}", receipt.message);
                SaveOutcome::Service(receipt)
            }
            Err(e) => {
                warn!("Save service unavailable, reporting mock success: {e}");
                SaveOutcome::Fallback(mock_receipt())
            }
        }
    }

    async fn call(&self, resume: &Resume) -> Result<SaveReceipt, reqwest::Error> {
        let response = self
            .client
            .post(format!("{}{SAVE_PATH}", self.base_url))
            .json(resume)
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}
