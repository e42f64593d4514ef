//! Catalog value types: form types, option kinds, prices and multipliers.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three estimator forms offered on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// Website build estimator (page-count tier + features).
    Website,
    /// Graphic design estimator (sum of selected services).
    Design,
    /// Photography estimator (primary session + extras).
    Photo,
}

/// How a form folds its selections into a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingShape {
    /// One exclusive base option scaled by the timeline, plus flat add-ons.
    BasePlusModifiers,
    /// Every selected service summed, then scaled by the timeline.
    SumOfServices,
}

impl FormType {
    /// All form types in display order.
    pub const ALL: [FormType; 3] = [FormType::Website, FormType::Design, FormType::Photo];

    /// Stable lowercase name, as used in URLs and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Website => "website",
            FormType::Design => "design",
            FormType::Photo => "photo",
        }
    }

    /// Pricing shape used by this form.
    pub fn pricing_shape(&self) -> PricingShape {
        match self {
            FormType::Website | FormType::Photo => PricingShape::BasePlusModifiers,
            FormType::Design => PricingShape::SumOfServices,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known form type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form type `{0}` (expected website, design or photo)")]
pub struct UnknownFormType(pub String);

impl FromStr for FormType {
    type Err = UnknownFormType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "website" => Ok(FormType::Website),
            "design" => Ok(FormType::Design),
            "photo" | "photography" => Ok(FormType::Photo),
            _ => Err(UnknownFormType(s.to_string())),
        }
    }
}

/// Selection semantics of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Mutually exclusive within its form (radio).
    Base,
    /// Mutually exclusive delivery-speed modifier.
    Timeline,
    /// Independently toggleable (checkbox).
    Addon,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptionKind::Base => "base",
            OptionKind::Timeline => "timeline",
            OptionKind::Addon => "addon",
        })
    }
}

/// A timeline price multiplier held exactly as basis points (1.0 = 10 000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Basis points in one whole unit.
    pub const SCALE: u32 = 10_000;

    /// The neutral multiplier, used when no timeline is selected.
    pub const ONE: Multiplier = Multiplier(Self::SCALE);

    /// Create a multiplier from basis points (14 000 = 1.4).
    pub const fn from_basis_points(bp: u32) -> Self {
        Self(bp)
    }

    /// Raw basis points.
    pub const fn basis_points(self) -> u32 {
        self.0
    }

    /// Approximate value for display and JSON.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::SCALE)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_f64())
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Price semantics of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Amount {
    /// Flat price in whole dollars.
    Dollars(u64),
    /// Scales the base scope of work.
    Multiplier(Multiplier),
}

/// One selectable line item of an estimator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedOption {
    /// Identifier, unique within its form.
    pub id: &'static str,
    /// Display text.
    pub label: &'static str,
    /// Selection semantics.
    pub kind: OptionKind,
    /// Flat price or multiplier, depending on `kind`.
    pub amount: Amount,
    /// Grouping label for display.
    pub category: &'static str,
    /// Free text shown next to the option.
    pub description: &'static str,
}

impl PricedOption {
    /// An exclusive base option with a flat price.
    pub const fn base(
        id: &'static str,
        label: &'static str,
        dollars: u64,
        category: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            kind: OptionKind::Base,
            amount: Amount::Dollars(dollars),
            category,
            description,
        }
    }

    /// An exclusive timeline option carrying a multiplier in basis points.
    pub const fn timeline(
        id: &'static str,
        label: &'static str,
        basis_points: u32,
        category: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            kind: OptionKind::Timeline,
            amount: Amount::Multiplier(Multiplier::from_basis_points(basis_points)),
            category,
            description,
        }
    }

    /// An independently toggleable option with a flat price.
    pub const fn addon(
        id: &'static str,
        label: &'static str,
        dollars: u64,
        category: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            kind: OptionKind::Addon,
            amount: Amount::Dollars(dollars),
            category,
            description,
        }
    }

    /// Flat price in dollars; zero for timeline options.
    pub fn dollars(&self) -> u64 {
        match self.amount {
            Amount::Dollars(d) => d,
            Amount::Multiplier(_) => 0,
        }
    }

    /// Multiplier of a timeline option.
    pub fn multiplier(&self) -> Option<Multiplier> {
        match self.amount {
            Amount::Multiplier(m) => Some(m),
            Amount::Dollars(_) => None,
        }
    }
}
