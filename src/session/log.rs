//! The session log: ordered hand history plus the pending prediction.

use crate::core::{Hand, NaturalWin, Outcome, PredictionRule};
use crate::session::error::{RejectedInput, SessionError};
use crate::session::snapshot::{SessionMetadata, Snapshot, Tally};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Stateful log of hands for one session.
///
/// The log is an explicitly owned value: every command takes `&mut self`,
/// runs to completion, and leaves the log consistent. The pending prediction
/// is never stored independently of the history; it is recomputed from the
/// last hand after each mutation.
///
/// # Example
///
/// ```rust
/// use natural_win::core::{Grade, Outcome};
/// use natural_win::session::SessionLog;
///
/// let mut log = SessionLog::new();
///
/// let first = log.submit(Outcome::Banker, false).unwrap();
/// assert_eq!(first.grade, Grade::Push);
/// assert_eq!(log.pending_prediction(), Some(Outcome::Player));
///
/// let second = log.submit(Outcome::Player, false).unwrap();
/// assert_eq!(second.grade, Grade::Win);
/// assert_eq!(log.score(), 1);
///
/// assert!(log.undo());
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.score(), 0);
///
/// log.reset();
/// assert!(log.is_empty());
/// assert_eq!(log.pending_prediction(), None);
/// ```
#[derive(Clone, Debug)]
pub struct SessionLog<R: PredictionRule = NaturalWin> {
    hands: Vec<Hand>,
    pending: Option<Outcome>,
    rule: R,
    metadata: SessionMetadata,
}

impl SessionLog<NaturalWin> {
    /// Create an empty session using the natural-win rule.
    pub fn new() -> Self {
        Self::with_rule(NaturalWin)
    }
}

impl Default for SessionLog<NaturalWin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PredictionRule> SessionLog<R> {
    /// Create an empty session driven by `rule`.
    pub fn with_rule(rule: R) -> Self {
        Self::from_parts(rule, Uuid::new_v4())
    }

    pub(crate) fn from_parts(rule: R, id: Uuid) -> Self {
        Self {
            hands: Vec::new(),
            pending: None,
            rule,
            metadata: SessionMetadata::new(id),
        }
    }

    /// Record a hand and advance the prediction.
    ///
    /// The new hand is graded against the prediction pending before the
    /// call. If the rule rejects `outcome` (e.g. `Tie`), the log is left
    /// untouched and the error is returned.
    pub fn submit(&mut self, outcome: Outcome, is_four_card_hand: bool) -> Result<Hand, SessionError> {
        let next = self.rule.next(outcome, is_four_card_hand).map_err(|err| {
            warn!(
                session = %self.metadata.id,
                %outcome,
                "Rejected submit: {}",
                err
            );
            err
        })?;

        let hand = Hand::follow(self.hands.last(), self.pending, outcome, is_four_card_hand);
        self.hands.push(hand.clone());
        self.pending = Some(next);
        self.metadata.touch();

        debug!(
            session = %self.metadata.id,
            seq = hand.sequence_number,
            %outcome,
            four_card = is_four_card_hand,
            grade = %hand.grade,
            score = hand.cumulative_score,
            pending = %next,
            "Recorded hand"
        );

        Ok(hand)
    }

    /// Remove the most recent hand.
    ///
    /// Returns `false` without touching anything when the log is empty.
    pub fn undo(&mut self) -> bool {
        let Some(removed) = self.hands.pop() else {
            trace!(session = %self.metadata.id, "Nothing to undo");
            return false;
        };

        self.pending = self.predict_from_last();
        self.metadata.touch();

        debug!(
            session = %self.metadata.id,
            seq = removed.sequence_number,
            remaining = self.hands.len(),
            pending = ?self.pending,
            "Undid hand"
        );

        true
    }

    /// Clear all hands and the pending prediction.
    pub fn reset(&mut self) {
        let cleared = self.hands.len();
        self.hands.clear();
        self.pending = None;
        self.metadata.touch();

        debug!(session = %self.metadata.id, cleared, "Reset session");
    }

    /// Fold a batch of inputs onto the log.
    ///
    /// Every input is checked against the rule first and all rejections are
    /// collected. If any input is rejected nothing is applied and the error
    /// lists every rejected position; otherwise the recorded hands are
    /// returned in order.
    pub fn replay<I>(&mut self, inputs: I) -> Result<Vec<Hand>, SessionError>
    where
        I: IntoIterator<Item = (Outcome, bool)>,
    {
        let inputs: Vec<(Outcome, bool)> = inputs.into_iter().collect();

        let checks: Vec<Validation<(), NonEmptyVec<RejectedInput>>> = inputs
            .iter()
            .enumerate()
            .map(|(position, &(outcome, is_four_card_hand))| {
                match self.rule.next(outcome, is_four_card_hand) {
                    Ok(_) => Validation::success(()),
                    Err(_) => Validation::fail(RejectedInput {
                        position,
                        outcome,
                        is_four_card_hand,
                    }),
                }
            })
            .collect();

        let validated: Validation<(), NonEmptyVec<RejectedInput>> =
            Validation::all_vec(checks).map(|_| ());

        if let Validation::Failure(errors) = validated {
            let rejected: Vec<RejectedInput> = errors.iter().copied().collect();
            warn!(
                session = %self.metadata.id,
                rejected = rejected.len(),
                "Rejected replay batch"
            );
            return Err(SessionError::ReplayRejected { rejected });
        }

        inputs
            .into_iter()
            .map(|(outcome, is_four_card_hand)| self.submit(outcome, is_four_card_hand))
            .collect()
    }

    /// Owned copy of the history and pending prediction.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            history: self.hands.clone(),
            pending_prediction: self.pending,
        }
    }

    /// Recorded hands, oldest first.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn last_hand(&self) -> Option<&Hand> {
        self.hands.last()
    }

    pub fn pending_prediction(&self) -> Option<Outcome> {
        self.pending
    }

    /// Current running score, 0 when empty.
    pub fn score(&self) -> i64 {
        self.hands.last().map_or(0, |h| h.cumulative_score)
    }

    pub fn tally(&self) -> Tally {
        Tally::from_hands(&self.hands)
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    // Every hand in the log was accepted by the rule when submitted, and
    // rules are pure, so re-deriving from the last hand cannot fail.
    fn predict_from_last(&self) -> Option<Outcome> {
        self.hands
            .last()
            .and_then(|h| self.rule.next(h.outcome, h.is_four_card_hand).ok())
    }
}
