//! The file-to-resume seam.
//!
//! Real text extraction is an external collaborator; the shipped
//! implementation stands in for it by returning the sample resume after a
//! simulated parse delay, matching the demo behavior of the product.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

use crate::models::resume::Resume;
use crate::models::sample::sample_resume;

/// Turns an uploaded file into a resume. Implementations may fail — the
/// caller surfaces failures without touching session state.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(&self, filename: &str, data: Bytes) -> Result<Resume>;
}

const PARSE_DELAY: Duration = Duration::from_secs(2);

/// Stub parser: ignores the file contents and resolves to the sample resume
/// after a fixed delay.
pub struct SampleResumeParser {
    delay: Duration,
}

impl SampleResumeParser {
    pub fn new() -> Self {
        Self::with_delay(PARSE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SampleResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeParser for SampleResumeParser {
    async fn parse(&self, filename: &str, data: Bytes) -> Result<Resume> {
        info!("Parsing uploaded file: {filename} ({} bytes)", data.len());
        tokio::time::sleep(self.delay).await;
        Ok(sample_resume())
    }
}
