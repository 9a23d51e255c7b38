//! Two-tier problem source: try the primary, fall back on any failure.

use std::sync::Arc;

use goldenpath_core::dataset::ProblemSource;
use goldenpath_core::problem::ProblemRecord;

use crate::error::ViewerError;

/// Which tier produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Fallback,
}

/// A snapshot plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Served {
    pub problems: Vec<ProblemRecord>,
    pub tier: Tier,
    /// Why the primary was skipped, when [`Tier::Fallback`] served.
    pub primary_error: Option<String>,
}

/// Primary source with a fallback behind it.
#[derive(Clone)]
pub struct TieredSource {
    primary: Arc<dyn ProblemSource>,
    fallback: Arc<dyn ProblemSource>,
}

impl TieredSource {
    pub fn new(primary: Arc<dyn ProblemSource>, fallback: Arc<dyn ProblemSource>) -> Self {
        Self { primary, fallback }
    }

    /// Load from the primary; on any error load from the fallback.
    ///
    /// Each tier is tried exactly once. When both fail the error carries
    /// both messages.
    pub async fn fetch(&self) -> Result<Served, ViewerError> {
        let primary_error = match self.primary.load().await {
            Ok(problems) => {
                tracing::debug!(source = self.primary.name(), count = problems.len(), "Primary source served");
                return Ok(Served {
                    problems,
                    tier: Tier::Primary,
                    primary_error: None,
                });
            }
            Err(e) => e.to_string(),
        };

        tracing::warn!(
            source = self.primary.name(),
            error = %primary_error,
            fallback = self.fallback.name(),
            "Primary source failed, using fallback",
        );

        match self.fallback.load().await {
            Ok(problems) => Ok(Served {
                problems,
                tier: Tier::Fallback,
                primary_error: Some(primary_error),
            }),
            Err(e) => {
                tracing::error!(source = self.fallback.name(), error = %e, "Fallback source failed");
                Err(ViewerError::AllSourcesFailed {
                    primary: primary_error,
                    fallback: e.to_string(),
                })
            }
        }
    }
}
