//! Core types and the prediction engine.
//!
//! This module contains the pure part of the crate:
//! - `Outcome` and `Grade` values
//! - Immutable `Hand` records
//! - The `PredictionRule` trait and the natural-win rule
//!
//! Nothing in this module holds mutable state; `SessionLog` in
//! [`crate::session`] is the only stateful container.

mod error;
mod hand;
mod outcome;
mod rule;

pub use error::PredictionError;
pub use hand::Hand;
pub use outcome::{Grade, Outcome};
pub use rule::{next_prediction, NaturalWin, PredictionRule};
