//! Lead submission payload types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Catalog, FormType, OptionKind};
use crate::selection::SelectionState;

/// What the visitor asked to do with their quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputAction {
    /// Download the quote as a document.
    Download,
    /// Receive the quote by email.
    Email,
    /// Book a call to discuss the project.
    Discuss,
}

impl fmt::Display for OutputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputAction::Download => "download",
            OutputAction::Email => "email",
            OutputAction::Discuss => "discuss",
        })
    }
}

/// Returned when a string does not name an output action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action `{0}` (expected download, email or discuss)")]
pub struct UnknownAction(pub String);

impl FromStr for OutputAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "download" => Ok(OutputAction::Download),
            "email" => Ok(OutputAction::Email),
            "discuss" => Ok(OutputAction::Discuss),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

/// Contact details typed into the lead form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Contact details that cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}

impl ContactDetails {
    /// Contact with just the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Check required fields before anything is sent.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Human-readable selection labels, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub base: Option<String>,
    pub timeline: Option<String>,
    pub addons: Vec<String>,
}

impl SelectionSummary {
    /// Resolve a selection's ids into labels.
    pub fn from_selection(selection: &SelectionState, catalog: &Catalog) -> Self {
        let form = selection.form();
        let label = |id: Option<&str>| {
            id.and_then(|id| catalog.find(form, id))
                .map(|option| option.label.to_string())
        };
        Self {
            base: label(selection.base_id()),
            timeline: label(selection.timeline_id()),
            addons: catalog
                .options_of_kind(form, OptionKind::Addon)
                .filter(|option| selection.has_addon(option.id))
                .map(|option| option.label.to_string())
                .collect(),
        }
    }
}

/// Payload handed to the lead-capture endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    /// Stable across retries of the same submission.
    pub id: Uuid,
    pub form_type: FormType,
    pub action: OutputAction,
    pub contact: ContactDetails,
    pub total: u64,
    pub display_total: String,
    pub selections: SelectionSummary,
}
