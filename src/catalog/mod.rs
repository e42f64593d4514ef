//! Priced option catalog.
//!
//! # Data Flow
//! ```text
//! website.rs / design.rs / photo.rs (static tables)
//!     → Catalog (one table per form type, immutable)
//!     → selection (validates option ids and kinds)
//!     → quoting engine (reads prices and multipliers)
//! ```
//!
//! # Design Decisions
//! - Tables are compiled in and never mutated
//! - Declaration order is display order; grouping never re-sorts
//! - Multipliers are basis points so pricing stays in integer arithmetic

mod design;
mod photo;
pub mod types;
mod website;

use serde::Serialize;

pub use types::{Amount, FormType, Multiplier, OptionKind, PricedOption, PricingShape, UnknownFormType};

/// Options of one category, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    /// Category label.
    pub category: &'static str,
    /// Options belonging to the category.
    pub options: Vec<&'static PricedOption>,
}

/// Read-only table of priced options for every form type.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    website: &'static [PricedOption],
    design: &'static [PricedOption],
    photo: &'static [PricedOption],
}

impl Catalog {
    /// The agency's published price list.
    pub fn builtin() -> Self {
        Self {
            website: website::OPTIONS,
            design: design::OPTIONS,
            photo: photo::OPTIONS,
        }
    }

    /// Build a catalog from explicit tables.
    pub fn new(
        website: &'static [PricedOption],
        design: &'static [PricedOption],
        photo: &'static [PricedOption],
    ) -> Self {
        Self {
            website,
            design,
            photo,
        }
    }

    /// All options of a form, grouped by category.
    ///
    /// Categories appear in order of first declaration; options keep their
    /// declaration order within a category.
    pub fn list_options(&self, form: FormType) -> Vec<&'static PricedOption> {
        self.grouped(form)
            .into_iter()
            .flat_map(|group| group.options)
            .collect()
    }

    fn table(&self, form: FormType) -> &'static [PricedOption] {
        match form {
            FormType::Website => self.website,
            FormType::Design => self.design,
            FormType::Photo => self.photo,
        }
    }

    /// Options of a form grouped by category.
    ///
    /// Groups appear in order of first appearance and options keep their
    /// declaration order inside each group.
    pub fn grouped(&self, form: FormType) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for option in self.table(form) {
            match groups.iter_mut().find(|g| g.category == option.category) {
                Some(group) => group.options.push(option),
                None => groups.push(CategoryGroup {
                    category: option.category,
                    options: vec![option],
                }),
            }
        }
        groups
    }

    /// Look up one option by id.
    pub fn find(&self, form: FormType, id: &str) -> Option<&'static PricedOption> {
        self.table(form).iter().find(|o| o.id == id)
    }

    /// Options of a single kind, in declaration order.
    pub fn options_of_kind(
        &self,
        form: FormType,
        kind: OptionKind,
    ) -> impl Iterator<Item = &'static PricedOption> {
        self.table(form).iter().filter(move |o| o.kind == kind)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
