//! Lead capture.
//!
//! # Data Flow
//! ```text
//! Calculator (Submitting)
//!     → ContactDetails::validate
//!     → LeadSubmission (labels, total, stable id)
//!     → LeadSink::submit (HTTP POST, 2xx = success)
//!     → Submitted | SubmitFailed
//! ```
//!
//! # Design Decisions
//! - The submission id is reused on retry so the receiver can de-duplicate
//! - Failures never touch the selection or the quote

pub mod sink;
pub mod types;

pub use sink::{HttpLeadSink, LeadSink, SubmissionError};
pub use types::{ContactDetails, ContactError, LeadSubmission, OutputAction, SelectionSummary, UnknownAction};
