//! Store worker wiring.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the session.

mod protocol;
mod worker;

pub use protocol::{StoreCmd, StoreErrorSource, StoreEvent};
pub use worker::{spawn_store_worker, StoreHandle};
