//! "What's included" breakdown.
//!
//! A declarative table per form maps selections to descriptive bullet
//! blocks. It reads the selection directly, never the quote, so the text
//! and the price always agree on what is selected.

use serde::Serialize;

use crate::catalog::FormType;
use crate::selection::SelectionState;

/// A titled list of deliverables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownBlock {
    /// Stable key for styling and tests.
    pub key: &'static str,
    /// Block heading.
    pub title: &'static str,
    /// Deliverable bullets.
    pub bullets: &'static [&'static str],
}

/// When a block is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Whenever a scope of work is selected.
    AnyScope,
    /// When the option with this id is selected.
    Selected(&'static str),
}

/// One row of a breakdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRule {
    /// Condition for showing the block.
    pub trigger: Trigger,
    /// Block to show.
    pub block: BreakdownBlock,
}

impl BreakdownRule {
    const fn new(trigger: Trigger, block: BreakdownBlock) -> Self {
        Self { trigger, block }
    }

    fn matches(&self, selection: &SelectionState) -> bool {
        match self.trigger {
            Trigger::AnyScope => true,
            Trigger::Selected(id) => selection.is_selected(id),
        }
    }
}

static WEBSITE_RULES: &[BreakdownRule] = &[
    BreakdownRule::new(
        Trigger::AnyScope,
        BreakdownBlock {
            key: "website-core",
            title: "Every website includes",
            bullets: &[
                "Responsive design for mobile, tablet and desktop",
                "On-page SEO basics and a sitemap",
                "Contact form wired to your inbox",
                "30 days of post-launch support",
            ],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("ecommerce-website"),
        BreakdownBlock {
            key: "website-ecommerce",
            title: "E-commerce setup",
            bullets: &[
                "Product catalog with variants and inventory",
                "Secure checkout and payment gateway integration",
                "Order notification emails",
                "Store management training session",
            ],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("priority-delivery"),
        BreakdownBlock {
            key: "website-priority",
            title: "Priority delivery",
            bullets: &["Project starts within 3 business days", "Twice-weekly progress reviews"],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("rush-delivery"),
        BreakdownBlock {
            key: "website-rush",
            title: "Rush delivery",
            bullets: &[
                "Dedicated project manager",
                "Daily progress updates",
                "Launch in under 2 weeks",
            ],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("advanced-seo"),
        BreakdownBlock {
            key: "website-advanced-seo",
            title: "Advanced SEO strategy",
            bullets: &[
                "Keyword and competitor research",
                "Three-month content plan",
                "Technical SEO audit",
            ],
        },
    ),
];

static DESIGN_RULES: &[BreakdownRule] = &[
    BreakdownRule::new(
        Trigger::AnyScope,
        BreakdownBlock {
            key: "design-core",
            title: "Every design project includes",
            bullets: &[
                "Two rounds of revisions per deliverable",
                "Print-ready and web-ready exports",
                "Editable source files",
            ],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("logo-design"),
        BreakdownBlock {
            key: "design-logo",
            title: "Logo package",
            bullets: &[
                "Primary, secondary and icon versions",
                "Full-color, black and white variants",
                "Vector files (SVG, EPS, PDF)",
            ],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("brand-guidelines"),
        BreakdownBlock {
            key: "design-guidelines",
            title: "Brand style guide",
            bullets: &["Color palette with print and screen values", "Typography hierarchy", "Logo usage do's and don'ts"],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("express-delivery"),
        BreakdownBlock {
            key: "design-express",
            title: "Express delivery",
            bullets: &["First concepts within 3 business days", "Same-day revision turnaround"],
        },
    ),
];

static PHOTO_RULES: &[BreakdownRule] = &[
    BreakdownRule::new(
        Trigger::AnyScope,
        BreakdownBlock {
            key: "photo-core",
            title: "Every session includes",
            bullets: &[
                "Pre-shoot planning call",
                "Professionally edited high-resolution images",
                "Private online gallery for download",
            ],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("product-photography"),
        BreakdownBlock {
            key: "photo-product",
            title: "Product photography",
            bullets: &["White-background and styled shots", "Images sized for marketplaces"],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("event-coverage"),
        BreakdownBlock {
            key: "photo-event",
            title: "Event coverage",
            bullets: &["Candid and posed coverage", "Sneak-peek selection within 48 hours"],
        },
    ),
    BreakdownRule::new(
        Trigger::Selected("next-day-delivery"),
        BreakdownBlock {
            key: "photo-next-day",
            title: "Next-day delivery",
            bullets: &["Priority editing queue", "Gallery delivered the next business day"],
        },
    ),
];

/// Breakdown table of a form.
pub fn rules(form: FormType) -> &'static [BreakdownRule] {
    match form {
        FormType::Website => WEBSITE_RULES,
        FormType::Design => DESIGN_RULES,
        FormType::Photo => PHOTO_RULES,
    }
}

/// Blocks to show for a selection, in table order. Empty until a scope of
/// work is selected.
pub fn breakdown(selection: &SelectionState) -> Vec<&'static BreakdownBlock> {
    if !selection.has_scope() {
        return Vec::new();
    }
    rules(selection.form())
        .iter()
        .filter(|rule| rule.matches(selection))
        .map(|rule| &rule.block)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn keys(selection: &SelectionState) -> Vec<&'static str> {
        breakdown(selection).iter().map(|b| b.key).collect()
    }

    #[test]
    fn test_suppressed_without_scope() {
        let catalog = Catalog::builtin();
        let mut state = SelectionState::new(FormType::Website);
        state.select_timeline(&catalog, "rush-delivery").unwrap();
        assert!(breakdown(&state).is_empty());
    }

    #[test]
    fn test_ecommerce_and_rush_blocks() {
        let catalog = Catalog::builtin();
        let mut state = SelectionState::new(FormType::Website);
        state.select_base(&catalog, "ecommerce-website").unwrap();
        assert_eq!(keys(&state), vec!["website-core", "website-ecommerce"]);

        state.select_timeline(&catalog, "rush-delivery").unwrap();
        assert_eq!(keys(&state), vec!["website-core", "website-ecommerce", "website-rush"]);

        state.select_base(&catalog, "small-website").unwrap();
        assert_eq!(keys(&state), vec!["website-core", "website-rush"]);
    }

    #[test]
    fn test_design_blocks_follow_services() {
        let catalog = Catalog::builtin();
        let mut state = SelectionState::new(FormType::Design);
        state.toggle_addon(&catalog, "logo-design").unwrap();
        state.select_timeline(&catalog, "express-delivery").unwrap();
        assert_eq!(keys(&state), vec!["design-core", "design-logo", "design-express"]);
    }

    #[test]
    fn test_rule_triggers_reference_catalog_ids() {
        let catalog = Catalog::builtin();
        for form in FormType::ALL {
            for rule in rules(form) {
                if let Trigger::Selected(id) = rule.trigger {
                    assert!(catalog.find(form, id).is_some(), "{form} rule references unknown `{id}`");
                }
            }
        }
    }
}
