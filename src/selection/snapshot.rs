//! Wire form of a selection, used by the HTTP API and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Catalog, FormType};
use crate::selection::state::{InvalidOptionError, SelectionState};

/// Serializable selection by option id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSnapshot {
    /// Base option id.
    pub base: Option<String>,
    /// Timeline option id.
    pub timeline: Option<String>,
    /// Add-on (or design service) ids.
    pub addons: Vec<String>,
}

impl SelectionState {
    /// Rebuild a state by replaying a snapshot through the mutation
    /// operations. Duplicate add-on ids count once.
    pub fn from_snapshot(
        form: FormType,
        catalog: &Catalog,
        snapshot: &SelectionSnapshot,
    ) -> Result<Self, InvalidOptionError> {
        let mut state = SelectionState::new(form);
        if let Some(base) = &snapshot.base {
            state.select_base(catalog, base)?;
        }
        if let Some(timeline) = &snapshot.timeline {
            state.select_timeline(catalog, timeline)?;
        }
        let addons: BTreeSet<&str> = snapshot.addons.iter().map(String::as_str).collect();
        for addon in addons {
            state.toggle_addon(catalog, addon)?;
        }
        Ok(state)
    }

    /// Snapshot of the current selection.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            base: self.base_id().map(str::to_string),
            timeline: self.timeline_id().map(str::to_string),
            addons: self.addon_ids().iter().map(|id| id.to_string()).collect(),
        }
    }
}
