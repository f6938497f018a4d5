//! Builder for constructing session logs.

use crate::core::{NaturalWin, PredictionRule};
use crate::session::log::SessionLog;
use uuid::Uuid;

/// Builder for constructing session logs with a fluent API.
///
/// # Example
///
/// ```rust
/// use natural_win::core::NaturalWin;
/// use natural_win::session::SessionBuilder;
/// use uuid::Uuid;
///
/// let id = Uuid::new_v4();
/// let log = SessionBuilder::new().id(id).rule(NaturalWin).build();
///
/// assert_eq!(log.id(), id);
/// assert!(log.is_empty());
/// ```
pub struct SessionBuilder<R: PredictionRule = NaturalWin> {
    id: Option<Uuid>,
    rule: R,
}

impl SessionBuilder<NaturalWin> {
    /// Create a new builder with the natural-win rule.
    pub fn new() -> Self {
        Self {
            id: None,
            rule: NaturalWin,
        }
    }
}

impl Default for SessionBuilder<NaturalWin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PredictionRule> SessionBuilder<R> {
    /// Use a fixed session id instead of a random v4 one.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Swap the prediction rule.
    pub fn rule<R2: PredictionRule>(self, rule: R2) -> SessionBuilder<R2> {
        SessionBuilder { id: self.id, rule }
    }

    /// Build an empty session log.
    pub fn build(self) -> SessionLog<R> {
        SessionLog::from_parts(self.rule, self.id.unwrap_or_else(Uuid::new_v4))
    }
}
