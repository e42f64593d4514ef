//! Per-form selection state with exclusivity enforced at every mutation.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::catalog::{Catalog, FormType, OptionKind, PricedOption, PricingShape};

/// A mutation referenced an option that does not exist in the form's
/// catalog, or exists with a different kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("option `{option_id}` is not a {expected} option of the {form} form")]
pub struct InvalidOptionError {
    /// Form the mutation targeted.
    pub form: FormType,
    /// Offending option id.
    pub option_id: String,
    /// Kind the operation required.
    pub expected: OptionKind,
}

/// The user's current choices on one estimator form.
///
/// Holds at most one base and at most one timeline option; add-ons are a set.
/// Ids are stored as the catalog's own `&'static str`, so only validated ids
/// can ever be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    form: FormType,
    selected_base_id: Option<&'static str>,
    selected_timeline_id: Option<&'static str>,
    selected_addon_ids: BTreeSet<&'static str>,
}

impl SelectionState {
    /// Empty selection for a freshly mounted form.
    pub fn new(form: FormType) -> Self {
        Self {
            form,
            selected_base_id: None,
            selected_timeline_id: None,
            selected_addon_ids: BTreeSet::new(),
        }
    }

    /// Form this state belongs to.
    pub fn form(&self) -> FormType {
        self.form
    }

    /// Selected base option id.
    pub fn base_id(&self) -> Option<&'static str> {
        self.selected_base_id
    }

    /// Selected timeline option id.
    pub fn timeline_id(&self) -> Option<&'static str> {
        self.selected_timeline_id
    }

    /// Selected add-on (or design service) ids, sorted.
    pub fn addon_ids(&self) -> &BTreeSet<&'static str> {
        &self.selected_addon_ids
    }

    /// Whether an add-on is currently selected.
    pub fn has_addon(&self, id: &str) -> bool {
        self.selected_addon_ids.contains(id)
    }

    /// Whether any option with this id is selected, whatever its kind.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_base_id == Some(id)
            || self.selected_timeline_id == Some(id)
            || self.has_addon(id)
    }

    /// Whether enough is selected to price a scope of work: a base option,
    /// or for the design form at least one service.
    pub fn has_scope(&self) -> bool {
        match self.form.pricing_shape() {
            PricingShape::BasePlusModifiers => self.selected_base_id.is_some(),
            PricingShape::SumOfServices => !self.selected_addon_ids.is_empty(),
        }
    }

    /// Whether nothing at all is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_base_id.is_none()
            && self.selected_timeline_id.is_none()
            && self.selected_addon_ids.is_empty()
    }

    /// Select a base option, replacing any previous base.
    pub fn select_base(&mut self, catalog: &Catalog, id: &str) -> Result<(), InvalidOptionError> {
        let option = self.resolve(catalog, id, OptionKind::Base)?;
        self.selected_base_id = Some(option.id);
        Ok(())
    }

    /// Select a timeline option, replacing any previous timeline.
    pub fn select_timeline(
        &mut self,
        catalog: &Catalog,
        id: &str,
    ) -> Result<(), InvalidOptionError> {
        let option = self.resolve(catalog, id, OptionKind::Timeline)?;
        self.selected_timeline_id = Some(option.id);
        Ok(())
    }

    /// Flip membership of an add-on. Returns whether it is now selected.
    pub fn toggle_addon(&mut self, catalog: &Catalog, id: &str) -> Result<bool, InvalidOptionError> {
        let option = self.resolve(catalog, id, OptionKind::Addon)?;
        if self.selected_addon_ids.remove(option.id) {
            Ok(false)
        } else {
            self.selected_addon_ids.insert(option.id);
            Ok(true)
        }
    }

    /// Clear every selection.
    pub fn reset(&mut self) {
        self.selected_base_id = None;
        self.selected_timeline_id = None;
        self.selected_addon_ids.clear();
    }

    fn resolve(
        &self,
        catalog: &Catalog,
        id: &str,
        expected: OptionKind,
    ) -> Result<&'static PricedOption, InvalidOptionError> {
        catalog
            .find(self.form, id)
            .filter(|option| option.kind == expected)
            .ok_or_else(|| InvalidOptionError {
                form: self.form,
                option_id: id.to_string(),
                expected,
            })
    }
}
