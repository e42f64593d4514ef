//! Quote result type.

use serde::Serialize;

use crate::catalog::Multiplier;

/// A price computed from a selection. Pure projection, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Base option price, or the sum of selected design services.
    pub base_amount: u64,
    /// Selected timeline multiplier (1.0 when none).
    pub timeline_multiplier: Multiplier,
    /// Sum of flat add-ons (always 0 for the design form).
    pub addon_total: u64,
    /// Final price in whole dollars.
    pub total: u64,
}

impl Quote {
    /// The quote of an empty selection.
    pub const ZERO: Quote = Quote {
        base_amount: 0,
        timeline_multiplier: Multiplier::ONE,
        addon_total: 0,
        total: 0,
    };
}

impl Default for Quote {
    fn default() -> Self {
        Self::ZERO
    }
}
