//! Website estimator options: page-count tier, delivery timeline, features.

use super::types::PricedOption;

pub(crate) static OPTIONS: &[PricedOption] = &[
    PricedOption::base(
        "landing-page",
        "Landing Page",
        600,
        "Website Size",
        "A single conversion-focused page.",
    ),
    PricedOption::base(
        "small-website",
        "Small Website",
        900,
        "Website Size",
        "Up to 5 pages.",
    ),
    PricedOption::base(
        "medium-website",
        "Medium Website",
        1_400,
        "Website Size",
        "Up to 10 pages.",
    ),
    PricedOption::base(
        "large-website",
        "Large Website",
        2_200,
        "Website Size",
        "Up to 20 pages with custom templates.",
    ),
    PricedOption::base(
        "ecommerce-website",
        "E-commerce Website",
        3_000,
        "Website Size",
        "Online store with catalog, cart and checkout.",
    ),
    PricedOption::timeline(
        "standard-delivery",
        "Standard Delivery",
        10_000,
        "Timeline",
        "Launch in 4-6 weeks.",
    ),
    PricedOption::timeline(
        "priority-delivery",
        "Priority Delivery",
        14_000,
        "Timeline",
        "Launch in 2-3 weeks.",
    ),
    PricedOption::timeline(
        "rush-delivery",
        "Rush Delivery",
        18_000,
        "Timeline",
        "Launch in under 2 weeks.",
    ),
    PricedOption::addon(
        "copywriting",
        "Professional Copywriting",
        400,
        "Features",
        "Page copy written by our content team.",
    ),
    PricedOption::addon(
        "blog-setup",
        "Blog Setup",
        300,
        "Features",
        "Blog templates, categories and an RSS feed.",
    ),
    PricedOption::addon(
        "booking-system",
        "Booking System",
        500,
        "Features",
        "Online appointment booking with calendar sync.",
    ),
    PricedOption::addon(
        "basic-seo",
        "Basic SEO Setup",
        250,
        "Marketing",
        "Meta tags, sitemap and search console setup.",
    ),
    PricedOption::addon(
        "advanced-seo",
        "Advanced SEO Strategy",
        600,
        "Marketing",
        "Keyword research, content plan and technical audit.",
    ),
    PricedOption::addon(
        "analytics-setup",
        "Analytics Setup",
        150,
        "Marketing",
        "Traffic and conversion tracking dashboards.",
    ),
    PricedOption::addon(
        "cms-training",
        "CMS Training",
        200,
        "Features",
        "A recorded walkthrough of editing your site.",
    ),
];
