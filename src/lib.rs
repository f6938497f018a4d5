//! Natural Win: a baccarat outcome log with a running betting signal
//!
//! The crate follows a "pure core, stateful shell" split. The core turns the
//! last hand into the next suggested bet with no side effects, while a single
//! explicitly owned log grades new hands, keeps the running score and
//! supports undo and reset.
//!
//! # Core Concepts
//!
//! - **Outcome**: `Player`, `Banker` or `Tie` (the latter is never predicted from)
//! - **Prediction rule**: alternate sides each hand, repeat after a four-card hand
//! - **Session log**: ordered history plus the pending prediction
//! - **View**: a pure projection from a snapshot to chart, table and indicator
//!
//! # Example
//!
//! ```rust
//! use natural_win::core::{Grade, Outcome};
//! use natural_win::session::SessionLog;
//! use natural_win::view::{render, Indicator, ViewConfig};
//!
//! let mut log = SessionLog::new();
//!
//! log.submit(Outcome::Banker, false).unwrap();
//! let hand = log.submit(Outcome::Player, false).unwrap();
//! assert_eq!(hand.grade, Grade::Win);
//!
//! let hand = log.submit(Outcome::Player, true).unwrap();
//! assert_eq!(hand.grade, Grade::Loss);
//! assert_eq!(log.pending_prediction(), Some(Outcome::Player));
//!
//! let view = render(&log.snapshot(), &ViewConfig::default());
//! assert_eq!(view.indicator, Indicator::Player);
//! assert_eq!(view.rows.len(), 3);
//! ```

pub mod core;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use core::{next_prediction, Grade, Hand, NaturalWin, Outcome, PredictionRule};
pub use session::{SessionBuilder, SessionError, SessionLog, Snapshot};
