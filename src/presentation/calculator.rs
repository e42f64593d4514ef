//! Calculator view: selection, quote, breakdown and lead flow for one form.
//!
//! # State Transitions
//! ```text
//! Idle → Quoted: a base option (or design service) is selected
//! Quoted → Idle: the scope of work is deselected or reset
//! Quoted → Submitting: an output action is chosen
//! Submitting → Submitted: the sink accepted the lead
//! Submitting → SubmitFailed: the sink failed or contact details were invalid
//! SubmitFailed → Submitting: retry
//! Submitting | SubmitFailed → Quoted: the lead form is closed
//! any → Idle | Quoted: the selection is edited
//! ```
//!
//! Every successful mutation recomputes the projection synchronously and
//! hands it to the subscribers. Rejected mutations change nothing.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Catalog, FormType};
use crate::leads::{ContactDetails, LeadSink, LeadSubmission, OutputAction, SelectionSummary, SubmissionError};
use crate::observability::metrics;
use crate::presentation::breakdown::{breakdown, BreakdownBlock};
use crate::presentation::display::{format_display_total, total_field};
use crate::quoting::{compute_quote, Quote};
use crate::selection::{InvalidOptionError, SelectionSnapshot, SelectionState};

/// Where the calculator view is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing priceable selected yet.
    Idle,
    /// A quote and breakdown are shown.
    Quoted,
    /// The lead form is open for an output action.
    Submitting,
    /// The lead was delivered.
    Submitted,
    /// The last delivery attempt failed; retry is offered.
    SubmitFailed,
}

/// Everything the view renders, derived from one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub form: FormType,
    pub quote: Quote,
    /// Visible total, e.g. `$2,560`.
    pub display_total: String,
    /// Hidden machine-readable total, e.g. `2560`.
    pub total_field: String,
    pub breakdown: Vec<&'static BreakdownBlock>,
    pub phase: Phase,
}

/// A lead-flow step was requested from a phase that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {operation} while {phase:?}")]
pub struct TransitionError {
    pub operation: &'static str,
    pub phase: Phase,
}

/// Failure of [`Calculator::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl SubmitError {
    /// Whether calling [`Calculator::submit`] again with the same contact
    /// details can succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmitError::Transition(_) => false,
            SubmitError::Submission(err) => err.is_retryable(),
        }
    }
}

type Subscriber = Box<dyn FnMut(&Projection) + Send>;

/// One estimator form's view state.
pub struct Calculator {
    catalog: Catalog,
    selection: SelectionState,
    projection: Projection,
    phase: Phase,
    action: Option<OutputAction>,
    lead_id: Option<Uuid>,
    last_error: Option<SubmissionError>,
    subscribers: Vec<Subscriber>,
}

impl Calculator {
    /// Mount a form with an empty selection.
    pub fn new(form: FormType, catalog: Catalog) -> Self {
        Self::with_selection(SelectionState::new(form), catalog)
    }

    /// Mount a form with a selection replayed from a snapshot.
    pub fn from_snapshot(
        form: FormType,
        catalog: Catalog,
        snapshot: &SelectionSnapshot,
    ) -> Result<Self, InvalidOptionError> {
        let selection = SelectionState::from_snapshot(form, &catalog, snapshot)?;
        Ok(Self::with_selection(selection, catalog))
    }

    fn with_selection(selection: SelectionState, catalog: Catalog) -> Self {
        let phase = if selection.has_scope() { Phase::Quoted } else { Phase::Idle };
        let projection = project(&selection, &catalog, phase);
        Self {
            catalog,
            selection,
            projection,
            phase,
            action: None,
            lead_id: None,
            last_error: None,
            subscribers: Vec::new(),
        }
    }

    pub fn form(&self) -> FormType {
        self.selection.form()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn quote(&self) -> &Quote {
        &self.projection.quote
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Output action chosen for the open or last lead form.
    pub fn action(&self) -> Option<OutputAction> {
        self.action
    }

    /// Error of the last failed submission, while in `SubmitFailed`.
    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    /// Register a callback run after every recompute and phase change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Projection) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn select_base(&mut self, id: &str) -> Result<&Projection, InvalidOptionError> {
        let catalog = self.catalog;
        self.mutate(|selection| selection.select_base(&catalog, id))
    }

    pub fn select_timeline(&mut self, id: &str) -> Result<&Projection, InvalidOptionError> {
        let catalog = self.catalog;
        self.mutate(|selection| selection.select_timeline(&catalog, id))
    }

    pub fn toggle_addon(&mut self, id: &str) -> Result<&Projection, InvalidOptionError> {
        let catalog = self.catalog;
        self.mutate(|selection| selection.toggle_addon(&catalog, id).map(|_| ()))
    }

    pub fn reset(&mut self) -> &Projection {
        self.selection.reset();
        self.after_edit();
        &self.projection
    }

    fn mutate(
        &mut self,
        apply: impl FnOnce(&mut SelectionState) -> Result<(), InvalidOptionError>,
    ) -> Result<&Projection, InvalidOptionError> {
        if let Err(err) = apply(&mut self.selection) {
            metrics::record_invalid_option(self.form());
            tracing::warn!(
                form = %err.form,
                option_id = %err.option_id,
                expected = %err.expected,
                "Rejected selection change"
            );
            return Err(err);
        }
        self.after_edit();
        Ok(&self.projection)
    }

    /// Editing the selection closes any open lead form.
    fn after_edit(&mut self) {
        self.phase = if self.selection.has_scope() { Phase::Quoted } else { Phase::Idle };
        self.action = None;
        self.lead_id = None;
        self.last_error = None;
        self.projection = project(&self.selection, &self.catalog, self.phase);
        tracing::debug!(
            form = %self.form(),
            total = self.projection.quote.total,
            phase = ?self.phase,
            "Quote recomputed"
        );
        self.publish();
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.projection.phase = phase;
        self.publish();
    }

    fn publish(&mut self) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.projection);
        }
    }

    /// Open the lead form for an output action.
    pub fn begin_submission(&mut self, action: OutputAction) -> Result<(), TransitionError> {
        match self.phase {
            Phase::Quoted | Phase::Submitted => {
                self.lead_id = Some(Uuid::new_v4());
            }
            Phase::Submitting | Phase::SubmitFailed if self.action != Some(action) => {
                self.lead_id = Some(Uuid::new_v4());
            }
            Phase::Submitting | Phase::SubmitFailed => {}
            Phase::Idle => {
                return Err(TransitionError {
                    operation: "start a submission",
                    phase: self.phase,
                })
            }
        }
        self.action = Some(action);
        self.last_error = None;
        self.set_phase(Phase::Submitting);
        Ok(())
    }

    /// Close the lead form without submitting.
    pub fn cancel_submission(&mut self) -> Result<(), TransitionError> {
        match self.phase {
            Phase::Submitting | Phase::SubmitFailed => {
                self.action = None;
                self.lead_id = None;
                self.last_error = None;
                self.set_phase(Phase::Quoted);
                Ok(())
            }
            phase => Err(TransitionError {
                operation: "cancel a submission",
                phase,
            }),
        }
    }

    /// Build the payload for the open lead form.
    pub fn lead(&self, contact: ContactDetails) -> Result<LeadSubmission, TransitionError> {
        let (Some(action), Some(id)) = (self.action, self.lead_id) else {
            return Err(TransitionError {
                operation: "build a lead",
                phase: self.phase,
            });
        };
        Ok(LeadSubmission {
            id,
            form_type: self.form(),
            action,
            contact,
            total: self.projection.quote.total,
            display_total: self.projection.display_total.clone(),
            selections: SelectionSummary::from_selection(&self.selection, &self.catalog),
        })
    }

    /// Validate contact details and deliver the lead.
    ///
    /// Allowed from `Submitting` and, as a retry, from `SubmitFailed`. On
    /// failure the view moves to `SubmitFailed`; the selection and quote are
    /// left exactly as they were.
    pub async fn submit<S: LeadSink>(
        &mut self,
        sink: &S,
        contact: ContactDetails,
    ) -> Result<(), SubmitError> {
        match self.phase {
            Phase::Submitting => {}
            Phase::SubmitFailed => self.set_phase(Phase::Submitting),
            phase => {
                return Err(TransitionError {
                    operation: "submit",
                    phase,
                }
                .into())
            }
        }

        let form = self.form();
        let outcome = match contact.validate() {
            Ok(()) => {
                let lead = self.lead(contact)?;
                sink.submit(&lead).await
            }
            Err(err) => Err(err.into()),
        };

        match outcome {
            Ok(()) => {
                metrics::record_submission(form, "success");
                self.last_error = None;
                self.set_phase(Phase::Submitted);
                Ok(())
            }
            Err(err) => {
                metrics::record_submission(form, "failure");
                tracing::warn!(form = %form, error = %err, "Lead submission failed");
                self.last_error = Some(err.clone());
                self.set_phase(Phase::SubmitFailed);
                Err(err.into())
            }
        }
    }
}

fn project(selection: &SelectionState, catalog: &Catalog, phase: Phase) -> Projection {
    let quote = compute_quote(selection, catalog);
    Projection {
        form: selection.form(),
        quote,
        display_total: format_display_total(quote.total),
        total_field: total_field(quote.total),
        breakdown: breakdown(selection),
        phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct AcceptAll;

    impl LeadSink for AcceptAll {
        async fn submit(&self, _lead: &LeadSubmission) -> Result<(), SubmissionError> {
            Ok(())
        }
    }

    #[test]
    fn test_phase_follows_scope() {
        let mut calc = Calculator::new(FormType::Website, Catalog::builtin());
        assert_eq!(calc.phase(), Phase::Idle);

        calc.select_timeline("rush-delivery").unwrap();
        assert_eq!(calc.phase(), Phase::Idle);

        calc.select_base("medium-website").unwrap();
        assert_eq!(calc.phase(), Phase::Quoted);
        assert_eq!(calc.projection().display_total, "$2,520");
        assert_eq!(calc.projection().total_field, "2520");

        calc.reset();
        assert_eq!(calc.phase(), Phase::Idle);
        assert_eq!(calc.quote(), &Quote::ZERO);
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut calc = Calculator::new(FormType::Design, Catalog::builtin());
        calc.subscribe(move |p| sink.lock().unwrap().push(p.quote.total));

        calc.toggle_addon("logo-design").unwrap();
        calc.toggle_addon("business-cards").unwrap();
        calc.select_timeline("express-delivery").unwrap();
        assert!(calc.toggle_addon("no-such-service").is_err());

        assert_eq!(*seen.lock().unwrap(), vec![600, 900, 1_440]);
    }

    #[test]
    fn test_submission_requires_quote() {
        let mut calc = Calculator::new(FormType::Photo, Catalog::builtin());
        let err = calc.begin_submission(OutputAction::Email).unwrap_err();
        assert_eq!(err.phase, Phase::Idle);
        assert!(calc.cancel_submission().is_err());
        assert!(calc.lead(ContactDetails::new("Ada", "ada@example.com")).is_err());
    }

    #[test]
    fn test_editing_closes_lead_form() {
        let mut calc = Calculator::new(FormType::Photo, Catalog::builtin());
        calc.select_base("headshot-session").unwrap();
        calc.begin_submission(OutputAction::Download).unwrap();
        assert_eq!(calc.phase(), Phase::Submitting);
        assert_eq!(calc.projection().phase, Phase::Submitting);

        calc.toggle_addon("drone-footage").unwrap();
        assert_eq!(calc.phase(), Phase::Quoted);
        assert!(calc.action().is_none());
    }

    #[test]
    fn test_lead_payload() {
        let mut calc = Calculator::new(FormType::Website, Catalog::builtin());
        calc.select_base("medium-website").unwrap();
        calc.select_timeline("priority-delivery").unwrap();
        calc.toggle_addon("advanced-seo").unwrap();
        calc.begin_submission(OutputAction::Discuss).unwrap();

        let lead = calc.lead(ContactDetails::new("Ada", "ada@example.com")).unwrap();
        assert_eq!(lead.total, 2_560);
        assert_eq!(lead.display_total, "$2,560");
        assert_eq!(lead.action, OutputAction::Discuss);
        assert_eq!(lead.selections.base.as_deref(), Some("Medium Website"));
        assert_eq!(lead.selections.timeline.as_deref(), Some("Priority Delivery"));
        assert_eq!(lead.selections.addons, vec!["Advanced SEO Strategy"]);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut calc = Calculator::new(FormType::Design, Catalog::builtin());
        calc.toggle_addon("logo-design").unwrap();
        calc.begin_submission(OutputAction::Email).unwrap();

        calc.submit(&AcceptAll, ContactDetails::new("Ada", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(calc.phase(), Phase::Submitted);

        // A fresh action after success opens a new lead.
        calc.begin_submission(OutputAction::Download).unwrap();
        assert_eq!(calc.phase(), Phase::Submitting);
    }

    #[tokio::test]
    async fn test_invalid_contact_fails_without_sending() {
        let mut calc = Calculator::new(FormType::Design, Catalog::builtin());
        calc.toggle_addon("logo-design").unwrap();
        calc.begin_submission(OutputAction::Email).unwrap();
        let before = calc.selection().clone();

        let err = calc
            .submit(&AcceptAll, ContactDetails::new("Ada", "not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Submission(SubmissionError::InvalidContact(_))
        ));
        assert!(!err.is_retryable());
        assert_eq!(calc.phase(), Phase::SubmitFailed);
        assert_eq!(calc.selection(), &before);
    }

    #[tokio::test]
    async fn test_submit_from_quoted_is_rejected() {
        let mut calc = Calculator::new(FormType::Website, Catalog::builtin());
        calc.select_base("landing-page").unwrap();
        let err = calc
            .submit(&AcceptAll, ContactDetails::new("Ada", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transition(_)));
        assert!(!err.is_retryable());
        assert_eq!(calc.phase(), Phase::Quoted);
    }
}
