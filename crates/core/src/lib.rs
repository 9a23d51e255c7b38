//! Domain layer for the Golden Path problems service and viewer.
//!
//! Holds the record types, creation validation, dataset sources, and the
//! wire envelopes both sides agree on. No HTTP here.

pub mod dataset;
pub mod envelope;
pub mod error;
pub mod problem;
pub mod stats;
pub mod types;
