//! Session error types.

use crate::core::{Outcome, PredictionError};
use std::fmt;
use thiserror::Error;

/// An input rejected during a batch replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedInput {
    /// Zero-based position in the replayed batch
    pub position: usize,
    pub outcome: Outcome,
    pub is_four_card_hand: bool,
}

impl fmt::Display for RejectedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.position, self.outcome)
    }
}

/// Errors that can occur when mutating or exporting a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The prediction rule refused the submitted outcome
    #[error(transparent)]
    Prediction(#[from] PredictionError),

    /// One or more replay inputs were refused; nothing was applied
    #[error("Replay rejected {} input(s): {}", .rejected.len(), join(.rejected))]
    ReplayRejected { rejected: Vec<RejectedInput> },

    /// Snapshot encoding to JSON failed
    #[error("Snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

fn join(rejected: &[RejectedInput]) -> String {
    rejected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
