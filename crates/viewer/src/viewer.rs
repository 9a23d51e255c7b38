//! Viewer state machine: `Loading -> Loaded | Failed`.

use goldenpath_core::problem::ProblemRecord;
use goldenpath_core::stats::ProblemStats;

use crate::error::ViewerError;
use crate::source::{Tier, TieredSource};

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    /// Records are available. `error` holds the primary failure message
    /// when the fallback tier served them.
    Loaded {
        problems: Vec<ProblemRecord>,
        tier: Tier,
        error: Option<String>,
    },
    /// Neither tier produced records.
    Failed { error: String },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn problems(&self) -> &[ProblemRecord] {
        match self {
            ViewState::Loaded { problems, .. } => problems,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Loaded { error, .. } => error.as_deref(),
            ViewState::Failed { error } => Some(error),
            ViewState::Loading => None,
        }
    }

    pub fn using_fallback(&self) -> bool {
        matches!(
            self,
            ViewState::Loaded {
                tier: Tier::Fallback,
                ..
            }
        )
    }

    pub fn stats(&self) -> ProblemStats {
        ProblemStats::from_records(self.problems())
    }
}

/// Holds a [`TieredSource`] and the state of the last load.
///
/// Nothing is cached between loads; each [`ProblemsViewer::load`] goes back
/// to the primary.
pub struct ProblemsViewer {
    source: TieredSource,
    state: ViewState,
}

impl ProblemsViewer {
    pub fn new(source: TieredSource) -> Self {
        Self {
            source,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetch once and settle into `Loaded` or `Failed`.
    pub async fn load(&mut self) -> &ViewState {
        self.state = ViewState::Loading;

        self.state = match self.source.fetch().await {
            Ok(served) => {
                tracing::info!(
                    tier = ?served.tier,
                    count = served.problems.len(),
                    "Problems loaded",
                );
                ViewState::Loaded {
                    problems: served.problems,
                    tier: served.tier,
                    error: served.primary_error,
                }
            }
            Err(ViewerError::AllSourcesFailed { primary, fallback }) => {
                tracing::error!(error = %primary, fallback_error = %fallback, "Failed to fetch problems");
                ViewState::Failed { error: primary }
            }
            Err(e) => ViewState::Failed {
                error: e.to_string(),
            },
        };

        &self.state
    }
}
