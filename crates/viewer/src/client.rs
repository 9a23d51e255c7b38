//! HTTP client for the problems service.
//!
//! Wraps `GET /problems` using [`reqwest`] and exposes it as a
//! [`ProblemSource`] so it can sit in front of the bundled fallback.

use async_trait::async_trait;

use goldenpath_core::dataset::ProblemSource;
use goldenpath_core::envelope::ListEnvelope;
use goldenpath_core::error::CoreError;
use goldenpath_core::problem::ProblemRecord;

use crate::error::ViewerError;

/// Client for one problems service endpoint.
pub struct ProblemsClient {
    client: reqwest::Client,
    problems_url: String,
}

impl ProblemsClient {
    /// * `problems_url` - Full list URL, e.g. `http://localhost:8787/problems`.
    pub fn new(problems_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            problems_url,
        }
    }

    /// Fetch the list envelope. One attempt, no retry.
    pub async fn fetch_problems(&self) -> Result<ListEnvelope, ViewerError> {
        let response = self.client.get(&self.problems_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<ListEnvelope>().await?)
    }
}

#[async_trait]
impl ProblemSource for ProblemsClient {
    fn name(&self) -> &str {
        "remote"
    }

    async fn load(&self) -> Result<Vec<ProblemRecord>, CoreError> {
        self.fetch_problems()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| CoreError::Upstream(e.to_string()))
    }
}
