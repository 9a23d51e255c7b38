//! Summary counters shown above the problem list.

use serde::Serialize;

use crate::problem::{ProblemRecord, STATUS_ONGOING, STATUS_RESOLVED};

/// Totals by status. Statuses other than `resolved` and `ongoing` count
/// toward `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProblemStats {
    pub total: usize,
    pub resolved: usize,
    pub ongoing: usize,
}

impl ProblemStats {
    pub fn from_records(records: &[ProblemRecord]) -> Self {
        let count = |status: &str| records.iter().filter(|r| r.status.as_str() == status).count();
        Self {
            total: records.len(),
            resolved: count(STATUS_RESOLVED),
            ongoing: count(STATUS_ONGOING),
        }
    }
}
