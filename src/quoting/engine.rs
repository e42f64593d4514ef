//! Core logic for calculating project prices from a selection.

use crate::catalog::{Catalog, Multiplier, OptionKind, PricingShape};
use crate::quoting::types::Quote;
use crate::selection::SelectionState;

/// Engine bound to a catalog. Cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteEngine {
    catalog: Catalog,
}

impl QuoteEngine {
    /// Create an engine over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog prices are read from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Price a selection.
    pub fn quote(&self, selection: &SelectionState) -> Quote {
        compute_quote(selection, &self.catalog)
    }
}

/// Fold a selection into a quote.
///
/// Website and photo: `round(base * multiplier + addons)`.
/// Design: `round(sum(services) * multiplier)`.
/// Rounding is half-up to whole dollars, applied once at the end. A
/// selection without a base (or without any design service) prices at 0.
pub fn compute_quote(selection: &SelectionState, catalog: &Catalog) -> Quote {
    let form = selection.form();

    let timeline_multiplier = selection
        .timeline_id()
        .and_then(|id| catalog.find(form, id))
        .and_then(|option| option.multiplier())
        .unwrap_or(Multiplier::ONE);

    let addon_sum: u64 = catalog
        .options_of_kind(form, OptionKind::Addon)
        .filter(|option| selection.has_addon(option.id))
        .map(|option| option.dollars())
        .sum();

    let (base_amount, addon_total) = match form.pricing_shape() {
        PricingShape::BasePlusModifiers => {
            let base = selection
                .base_id()
                .and_then(|id| catalog.find(form, id))
                .map(|option| option.dollars())
                .unwrap_or(0);
            (base, addon_sum)
        }
        PricingShape::SumOfServices => (addon_sum, 0),
    };

    let total = if selection.has_scope() {
        scaled_total(base_amount, timeline_multiplier, addon_total)
    } else {
        0
    };

    Quote {
        base_amount,
        timeline_multiplier,
        addon_total,
        total,
    }
}

/// `round_half_up(base * multiplier + addons)` in exact integer arithmetic.
fn scaled_total(base: u64, multiplier: Multiplier, addons: u64) -> u64 {
    let scale = u128::from(Multiplier::SCALE);
    let scaled = u128::from(base) * u128::from(multiplier.basis_points())
        + u128::from(addons) * scale;
    let rounded = (scaled + scale / 2) / scale;
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FormType, PricedOption};

    fn select(form: FormType, base: Option<&str>, timeline: Option<&str>, addons: &[&str]) -> SelectionState {
        let catalog = Catalog::builtin();
        let mut state = SelectionState::new(form);
        if let Some(id) = base {
            state.select_base(&catalog, id).unwrap();
        }
        if let Some(id) = timeline {
            state.select_timeline(&catalog, id).unwrap();
        }
        for id in addons {
            state.toggle_addon(&catalog, id).unwrap();
        }
        state
    }

    #[test]
    fn test_website_priority_with_seo() {
        let state = select(
            FormType::Website,
            Some("medium-website"),
            Some("priority-delivery"),
            &["advanced-seo"],
        );
        let quote = compute_quote(&state, &Catalog::builtin());
        assert_eq!(quote.base_amount, 1_400);
        assert_eq!(quote.timeline_multiplier, Multiplier::from_basis_points(14_000));
        assert_eq!(quote.addon_total, 600);
        assert_eq!(quote.total, 2_560);
    }

    #[test]
    fn test_design_services_times_timeline() {
        let state = select(
            FormType::Design,
            None,
            Some("express-delivery"),
            &["logo-design", "business-cards"],
        );
        let quote = compute_quote(&state, &Catalog::builtin());
        assert_eq!(quote.base_amount, 900);
        assert_eq!(quote.addon_total, 0);
        assert_eq!(quote.total, 1_440);
    }

    #[test]
    fn test_photo_without_timeline() {
        let state = select(
            FormType::Photo,
            Some("product-photography"),
            None,
            &["studio-half-day"],
        );
        let quote = compute_quote(&state, &Catalog::builtin());
        assert_eq!(quote.timeline_multiplier, Multiplier::ONE);
        assert_eq!(quote.total, 950);
    }

    #[test]
    fn test_empty_scope_is_zero() {
        let catalog = Catalog::builtin();
        assert_eq!(compute_quote(&SelectionState::new(FormType::Website), &catalog), Quote::ZERO);

        let timeline_only = select(FormType::Design, None, Some("express-delivery"), &[]);
        assert_eq!(compute_quote(&timeline_only, &catalog).total, 0);

        let addons_only = select(
            FormType::Website,
            None,
            Some("rush-delivery"),
            &["advanced-seo", "copywriting"],
        );
        let quote = compute_quote(&addons_only, &catalog);
        assert_eq!(quote.addon_total, 1_000);
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn test_timeline_does_not_scale_addons() {
        let state = select(
            FormType::Website,
            Some("landing-page"),
            Some("rush-delivery"),
            &["booking-system"],
        );
        // 600 * 1.8 + 500, not (600 + 500) * 1.8
        assert_eq!(compute_quote(&state, &Catalog::builtin()).total, 1_580);
    }

    static HALVES: &[PricedOption] = &[
        PricedOption::base("odd", "Odd", 5, "Size", ""),
        PricedOption::timeline("tenth", "Tenth", 11_000, "Timeline", ""),
        PricedOption::timeline("third", "Third", 13_333, "Timeline", ""),
    ];

    #[test]
    fn test_round_half_up_once() {
        let catalog = Catalog::new(HALVES, &[], &[]);
        let mut state = SelectionState::new(FormType::Website);
        state.select_base(&catalog, "odd").unwrap();

        // 5 * 1.1 = 5.5 rounds up to 6
        state.select_timeline(&catalog, "tenth").unwrap();
        assert_eq!(compute_quote(&state, &catalog).total, 6);

        // 5 * 1.3333 = 6.6665 rounds to 7
        state.select_timeline(&catalog, "third").unwrap();
        assert_eq!(compute_quote(&state, &catalog).total, 7);
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = QuoteEngine::new(Catalog::builtin());
        let state = select(FormType::Photo, Some("event-coverage"), Some("fast-turnaround"), &["drone-footage"]);
        assert_eq!(engine.quote(&state), engine.quote(&state));
        assert_eq!(engine.quote(&state).total, 1_960);
    }
}
