//! Design estimator options. Services are additive; there is no base tier.

use super::types::PricedOption;

pub(crate) static OPTIONS: &[PricedOption] = &[
    PricedOption::addon(
        "logo-design",
        "Logo Design",
        600,
        "Logo & Brand",
        "Three initial concepts and two rounds of refinement.",
    ),
    PricedOption::addon(
        "logo-refresh",
        "Logo Refresh",
        350,
        "Logo & Brand",
        "Modernize an existing mark.",
    ),
    PricedOption::addon(
        "brand-guidelines",
        "Brand Style Guide",
        800,
        "Logo & Brand",
        "Colors, typography and usage rules in one document.",
    ),
    PricedOption::addon(
        "business-cards",
        "Business Cards",
        300,
        "Print",
        "Double-sided card design, print-ready.",
    ),
    PricedOption::addon(
        "brochure-design",
        "Brochure Design",
        500,
        "Print",
        "Tri-fold or bi-fold layout.",
    ),
    PricedOption::addon(
        "packaging-design",
        "Packaging Design",
        900,
        "Print",
        "Dieline-ready packaging artwork.",
    ),
    PricedOption::addon(
        "social-media-kit",
        "Social Media Kit",
        400,
        "Digital",
        "Profile images, banners and post templates.",
    ),
    PricedOption::addon(
        "presentation-template",
        "Presentation Template",
        450,
        "Digital",
        "Branded slide master with 15 layouts.",
    ),
    PricedOption::timeline(
        "standard-turnaround",
        "Standard Turnaround",
        10_000,
        "Timeline",
        "First concepts within 2 weeks.",
    ),
    PricedOption::timeline(
        "priority-turnaround",
        "Priority Turnaround",
        13_000,
        "Timeline",
        "First concepts within 1 week.",
    ),
    PricedOption::timeline(
        "express-delivery",
        "Express Delivery",
        16_000,
        "Timeline",
        "First concepts within 3 business days.",
    ),
];
