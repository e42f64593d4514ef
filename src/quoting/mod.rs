//! Quote computation.

pub mod engine;
pub mod types;

pub use engine::{compute_quote, QuoteEngine};
pub use types::Quote;
