//! Photography estimator options: primary session, editing turnaround, extras.

use super::types::PricedOption;

pub(crate) static OPTIONS: &[PricedOption] = &[
    PricedOption::base(
        "headshot-session",
        "Headshot Session",
        350,
        "Photography",
        "One hour, up to three looks.",
    ),
    PricedOption::base(
        "product-photography",
        "Product Photography Session",
        650,
        "Photography",
        "Up to 20 products on seamless background.",
    ),
    PricedOption::base(
        "event-coverage",
        "Event Coverage",
        1_200,
        "Photography",
        "Up to four hours on location.",
    ),
    PricedOption::base(
        "brand-lifestyle-shoot",
        "Brand Lifestyle Shoot",
        1_500,
        "Photography",
        "Half-day styled shoot with models and props.",
    ),
    PricedOption::timeline(
        "standard-editing",
        "Standard Editing",
        10_000,
        "Delivery",
        "Gallery delivered within 10 business days.",
    ),
    PricedOption::timeline(
        "fast-turnaround",
        "Fast Turnaround",
        13_000,
        "Delivery",
        "Gallery delivered within 4 business days.",
    ),
    PricedOption::timeline(
        "next-day-delivery",
        "Next-Day Delivery",
        15_000,
        "Delivery",
        "Gallery delivered the next business day.",
    ),
    PricedOption::addon(
        "studio-half-day",
        "Studio Half-Day",
        300,
        "Extras",
        "Four hours of studio rental with lighting.",
    ),
    PricedOption::addon(
        "advanced-retouching",
        "Advanced Retouching",
        250,
        "Extras",
        "Skin, color and composite retouching.",
    ),
    PricedOption::addon(
        "additional-location",
        "Additional Location",
        200,
        "Extras",
        "A second location on the same day.",
    ),
    PricedOption::addon(
        "drone-footage",
        "Drone Footage",
        400,
        "Extras",
        "Aerial stills from a licensed pilot.",
    ),
    PricedOption::addon(
        "usage-license",
        "Extended Usage License",
        350,
        "Licensing",
        "Print and paid advertising rights.",
    ),
];
