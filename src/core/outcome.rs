//! Hand outcomes and the grades assigned to them.
//!
//! Both types are plain `Copy` values. All methods are pure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Winner of a single baccarat hand.
///
/// Only `Player` and `Banker` take part in the alternation rule. `Tie` is
/// representable so that callers can name it, but every entry point that
/// derives a prediction rejects it.
///
/// # Example
///
/// ```rust
/// use natural_win::core::Outcome;
///
/// assert_eq!(Outcome::Player.opposite(), Some(Outcome::Banker));
/// assert_eq!(Outcome::Banker.opposite(), Some(Outcome::Player));
/// assert_eq!(Outcome::Tie.opposite(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Player,
    Banker,
    Tie,
}

impl Outcome {
    /// Display name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Banker => "Banker",
            Self::Tie => "Tie",
        }
    }

    /// Single-letter glyph used by compact views.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Player => "P",
            Self::Banker => "B",
            Self::Tie => "T",
        }
    }

    /// The other side of the Player/Banker pair.
    ///
    /// Returns `None` for `Tie`, which has no opposite.
    pub fn opposite(&self) -> Option<Outcome> {
        match self {
            Self::Player => Some(Self::Banker),
            Self::Banker => Some(Self::Player),
            Self::Tie => None,
        }
    }

    /// Check if this outcome can feed the prediction rule.
    pub fn is_side(&self) -> bool {
        !matches!(self, Self::Tie)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Result of grading a hand against the prediction pending before it.
///
/// # Example
///
/// ```rust
/// use natural_win::core::{Grade, Outcome};
///
/// assert_eq!(Grade::assess(None, Outcome::Banker), Grade::Push);
/// assert_eq!(Grade::assess(Some(Outcome::Player), Outcome::Player), Grade::Win);
/// assert_eq!(Grade::assess(Some(Outcome::Player), Outcome::Banker), Grade::Loss);
/// assert_eq!(Grade::Loss.delta(), -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Grade {
    Win,
    Loss,
    Push,
}

impl Grade {
    /// Grade an outcome against the prediction that was pending.
    ///
    /// With no prediction the hand is a push; otherwise it wins on a match
    /// and loses on anything else.
    pub fn assess(predicted: Option<Outcome>, actual: Outcome) -> Grade {
        match predicted {
            None => Self::Push,
            Some(p) if p == actual => Self::Win,
            Some(_) => Self::Loss,
        }
    }

    /// Signed contribution to the running score.
    pub fn delta(&self) -> i64 {
        match self {
            Self::Win => 1,
            Self::Loss => -1,
            Self::Push => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Push => "Push",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
