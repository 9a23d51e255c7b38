//! Wire envelopes shared by the service and the viewer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::problem::ProblemRecord;
use crate::types::{iso_timestamp, Timestamp};

/// `{ "data": [...], "count": n, "timestamp": "..." }` returned by list reads.
///
/// Construct with [`ListEnvelope::new`] so `count` always equals `data.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope {
    pub data: Vec<ProblemRecord>,
    pub count: usize,
    pub timestamp: String,
}

impl ListEnvelope {
    pub fn new(data: Vec<ProblemRecord>, at: Timestamp) -> Self {
        Self {
            count: data.len(),
            data,
            timestamp: iso_timestamp(at),
        }
    }
}

/// Success message returned alongside a created record.
pub const CREATED_MESSAGE: &str = "Problem created successfully";

/// `{ "data": {...}, "message": "..." }` returned by a create.
///
/// `data` is the submitted object plus the server-assigned fields, so it is
/// kept untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedEnvelope {
    pub data: Map<String, Value>,
    pub message: String,
}

impl CreatedEnvelope {
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            data,
            message: CREATED_MESSAGE.to_string(),
        }
    }
}
