//! Selection state management.
//!
//! One `SelectionState` per form instance. Mutations validate ids against
//! the catalog and keep base and timeline choices mutually exclusive, so a
//! rejected mutation never leaves a partial change behind.

pub mod snapshot;
pub mod state;

pub use snapshot::SelectionSnapshot;
pub use state::{InvalidOptionError, SelectionState};
