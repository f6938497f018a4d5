//! Read-only snapshots of a session and its metadata.

use crate::core::{Grade, Hand, Outcome};
use crate::session::error::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and timestamps tracked by a session log
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Unique session identifier
    pub id: Uuid,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Last successful mutation (creation time until the first one)
    pub updated_at: DateTime<Utc>,
}

impl SessionMetadata {
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for SessionMetadata {
    fn default() -> Self {
        Self::new(Uuid::new_v4())
    }
}

/// Point-in-time copy of a session's history and pending prediction.
///
/// Snapshots own their data, so a view can hold one while the log keeps
/// changing.
///
/// # Example
///
/// ```rust
/// use natural_win::core::Outcome;
/// use natural_win::session::SessionLog;
///
/// let mut log = SessionLog::new();
/// log.submit(Outcome::Banker, false).unwrap();
///
/// let snapshot = log.snapshot();
/// assert_eq!(snapshot.history.len(), 1);
/// assert_eq!(snapshot.pending_prediction, Some(Outcome::Player));
/// assert_eq!(snapshot.score(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Recorded hands, oldest first
    pub history: Vec<Hand>,
    /// Suggested outcome for the next hand, absent on an empty log
    pub pending_prediction: Option<Outcome>,
}

impl Snapshot {
    /// Cumulative score of the last hand, or 0 when empty.
    pub fn score(&self) -> i64 {
        self.history.last().map_or(0, |h| h.cumulative_score)
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Count wins, losses and pushes across the history.
    pub fn tally(&self) -> Tally {
        Tally::from_hands(&self.history)
    }

    /// Encode as JSON for a view binding.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Grade counts across a history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
    pub pushes: usize,
}

impl Tally {
    pub fn from_hands(hands: &[Hand]) -> Self {
        hands.iter().fold(Self::default(), |mut tally, hand| {
            match hand.grade {
                Grade::Win => tally.wins += 1,
                Grade::Loss => tally.losses += 1,
                Grade::Push => tally.pushes += 1,
            }
            tally
        })
    }

    /// Wins minus losses; always equals the last cumulative score.
    pub fn net(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> Vec<Hand> {
        let first = Hand::follow(None, None, Outcome::Banker, false);
        let second = Hand::follow(Some(&first), Some(Outcome::Player), Outcome::Player, false);
        let third = Hand::follow(Some(&second), Some(Outcome::Banker), Outcome::Player, true);
        vec![first, second, third]
    }

    #[test]
    fn empty_snapshot_scores_zero() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.score(), 0);
        assert_eq!(snapshot.tally(), Tally::default());
    }

    #[test]
    fn tally_counts_grades() {
        let snapshot = Snapshot {
            history: sample_history(),
            pending_prediction: Some(Outcome::Player),
        };

        let tally = snapshot.tally();
        assert_eq!(tally.wins, 1);
        assert_eq!(tally.losses, 1);
        assert_eq!(tally.pushes, 1);
        assert_eq!(tally.net(), snapshot.score());
    }

    #[test]
    fn snapshot_serializes_correctly() {
        let snapshot = Snapshot {
            history: sample_history(),
            pending_prediction: Some(Outcome::Player),
        };

        let json = snapshot.to_json().unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn metadata_starts_with_equal_timestamps() {
        let metadata = SessionMetadata::default();
        assert_eq!(metadata.created_at, metadata.updated_at);
    }

    #[test]
    fn touch_advances_updated_at() {
        let mut metadata = SessionMetadata::default();
        let created = metadata.created_at;
        metadata.touch();
        assert!(metadata.updated_at >= created);
        assert_eq!(metadata.created_at, created);
    }
}
