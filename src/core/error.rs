//! Prediction error types.

use super::outcome::Outcome;
use thiserror::Error;

/// Errors raised by a prediction rule.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PredictionError {
    /// The outcome has no place in the alternation rule
    #[error("Unsupported outcome {outcome}: only Player and Banker can be predicted from")]
    UnsupportedOutcome { outcome: Outcome },
}
