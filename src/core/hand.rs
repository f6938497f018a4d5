//! Recorded hands.
//!
//! A hand is an immutable value: once graded and scored it never changes.
//! The only way to alter history is to drop hands from the tail of a log.

use super::outcome::{Grade, Outcome};
use serde::{Deserialize, Serialize};

/// One recorded hand, graded against the prediction pending before it.
///
/// # Example
///
/// ```rust
/// use natural_win::core::{Grade, Hand, Outcome};
///
/// let first = Hand::follow(None, None, Outcome::Banker, false);
/// assert_eq!(first.sequence_number, 1);
/// assert_eq!(first.grade, Grade::Push);
///
/// let second = Hand::follow(Some(&first), Some(Outcome::Player), Outcome::Player, false);
/// assert_eq!(second.sequence_number, 2);
/// assert_eq!(second.grade, Grade::Win);
/// assert_eq!(second.cumulative_score, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// Position in the session, starting at 1
    pub sequence_number: usize,
    /// Winner of this hand
    pub outcome: Outcome,
    /// Whether the hand was resolved with exactly four cards
    pub is_four_card_hand: bool,
    /// Prediction pending before this hand was recorded
    pub predicted_outcome: Option<Outcome>,
    /// Grade of `outcome` against `predicted_outcome`
    pub grade: Grade,
    /// Running score including this hand
    pub cumulative_score: i64,
}

impl Hand {
    /// Build the hand that follows `previous`.
    ///
    /// Sequence number and cumulative score continue from `previous`, or
    /// start at 1 and 0 when there is none.
    pub fn follow(
        previous: Option<&Hand>,
        predicted_outcome: Option<Outcome>,
        outcome: Outcome,
        is_four_card_hand: bool,
    ) -> Self {
        let grade = Grade::assess(predicted_outcome, outcome);
        let (last_seq, last_score) = previous
            .map(|h| (h.sequence_number, h.cumulative_score))
            .unwrap_or((0, 0));

        Self {
            sequence_number: last_seq + 1,
            outcome,
            is_four_card_hand,
            predicted_outcome,
            grade,
            cumulative_score: last_score + grade.delta(),
        }
    }
}
