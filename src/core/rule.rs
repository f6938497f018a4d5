//! Prediction rules that turn the last recorded hand into the next bet.
//!
//! A rule is a pure function of the immediately preceding hand. It never
//! looks deeper into the history, so a log can recompute its pending
//! prediction in O(1) after any mutation.

use super::error::PredictionError;
use super::outcome::Outcome;

/// Pure rule deriving the next suggested outcome from the last hand.
///
/// Implementations must be deterministic and free of side effects: the same
/// `(last, was_four_card_hand)` pair always yields the same answer. A rule
/// may reject inputs it has no answer for, and must do so without panicking.
///
/// # Example
///
/// ```rust
/// use natural_win::core::{Outcome, PredictionError, PredictionRule};
///
/// /// Always bets the side that just won.
/// struct FollowTheShoe;
///
/// impl PredictionRule for FollowTheShoe {
///     fn name(&self) -> &str {
///         "FollowTheShoe"
///     }
///
///     fn next(&self, last: Outcome, _four: bool) -> Result<Outcome, PredictionError> {
///         if last.is_side() {
///             Ok(last)
///         } else {
///             Err(PredictionError::UnsupportedOutcome { outcome: last })
///         }
///     }
/// }
///
/// assert_eq!(FollowTheShoe.next(Outcome::Banker, false), Ok(Outcome::Banker));
/// ```
pub trait PredictionRule: Send + Sync {
    /// Rule name for display/logging.
    fn name(&self) -> &str;

    /// Derive the next prediction from the last recorded hand.
    fn next(&self, last: Outcome, was_four_card_hand: bool) -> Result<Outcome, PredictionError>;
}

/// The natural-win strategy: alternate sides each hand, but repeat the last
/// winner when the hand was decided with four cards.
///
/// # Example
///
/// ```rust
/// use natural_win::core::{NaturalWin, Outcome, PredictionRule};
///
/// let rule = NaturalWin;
/// assert_eq!(rule.next(Outcome::Banker, false), Ok(Outcome::Player));
/// assert_eq!(rule.next(Outcome::Banker, true), Ok(Outcome::Banker));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalWin;

impl PredictionRule for NaturalWin {
    fn name(&self) -> &str {
        "NaturalWin"
    }

    fn next(&self, last: Outcome, was_four_card_hand: bool) -> Result<Outcome, PredictionError> {
        next_prediction(last, was_four_card_hand)
    }
}

/// Next suggested outcome under the natural-win strategy.
///
/// A four-card hand repeats `last`; any other hand swaps Player and Banker.
/// `Tie` is rejected in both cases: no alternation is defined for it, and
/// accepting it on four-card hands only would make the rule's domain depend
/// on the flag.
///
/// # Example
///
/// ```rust
/// use natural_win::core::{next_prediction, Outcome, PredictionError};
///
/// assert_eq!(next_prediction(Outcome::Player, false), Ok(Outcome::Banker));
/// assert_eq!(next_prediction(Outcome::Player, true), Ok(Outcome::Player));
/// assert_eq!(
///     next_prediction(Outcome::Tie, false),
///     Err(PredictionError::UnsupportedOutcome { outcome: Outcome::Tie })
/// );
/// ```
pub fn next_prediction(last: Outcome, was_four_card_hand: bool) -> Result<Outcome, PredictionError> {
    let opposite = last
        .opposite()
        .ok_or(PredictionError::UnsupportedOutcome { outcome: last })?;

    if was_four_card_hand {
        Ok(last)
    } else {
        Ok(opposite)
    }
}
