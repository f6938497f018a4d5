//! Stateful session log over the pure prediction core.
//!
//! `SessionLog` owns the ordered history of hands and derives the pending
//! prediction from the last one. It exposes three commands (`submit`,
//! `undo`, `reset`) and a read-only `snapshot` for views.
//!
//! The log does no internal locking. Hosts that share a session between
//! callers must serialize commands themselves.

mod builder;
mod error;
mod log;
mod snapshot;

pub use builder::SessionBuilder;
pub use error::{RejectedInput, SessionError};
pub use log::SessionLog;
pub use snapshot::{SessionMetadata, Snapshot, Tally};
