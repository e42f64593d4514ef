//! Presentation and sync layer.
//!
//! # Data Flow
//! ```text
//! user action
//!     → Calculator::{select_base, select_timeline, toggle_addon, reset}
//!     → SelectionState mutation (rejected mutations stop here)
//!     → compute_quote + breakdown (both read the same selection)
//!     → Projection { display total, total field, blocks, phase }
//!     → subscribers
//! ```

pub mod breakdown;
pub mod calculator;
pub mod display;

pub use breakdown::{breakdown, BreakdownBlock, BreakdownRule, Trigger};
pub use calculator::{Calculator, Phase, Projection, SubmitError, TransitionError};
pub use display::{format_display_total, parse_display_total, total_field};
