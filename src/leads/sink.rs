//! Lead submission boundary.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::config::SubmissionConfig;
use crate::leads::types::{ContactError, LeadSubmission};

/// A lead could not be delivered. Selection and quote are never affected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Network failure, timeout, or client setup failure.
    #[error("lead endpoint unreachable: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("lead endpoint returned status {0}")]
    Status(u16),

    /// Contact details were rejected before sending.
    #[error("invalid contact details: {0}")]
    InvalidContact(#[from] ContactError),
}

impl SubmissionError {
    /// Whether sending the same lead again can succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SubmissionError::InvalidContact(_))
    }
}

/// Destination for lead submissions.
pub trait LeadSink {
    /// Deliver one lead. 2xx is success, anything else an error.
    fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

/// Posts leads as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpLeadSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLeadSink {
    /// Create a sink with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a sink from the `[submission]` config section.
    pub fn from_config(config: &SubmissionConfig) -> Result<Self, SubmissionError> {
        Self::new(config.endpoint.clone(), Duration::from_secs(config.timeout_secs))
    }

    /// Endpoint leads are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LeadSink for HttpLeadSink {
    async fn submit(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(
                lead_id = %lead.id,
                form = %lead.form_type,
                status = status.as_u16(),
                "Lead delivered"
            );
            Ok(())
        } else {
            tracing::warn!(
                lead_id = %lead.id,
                form = %lead.form_type,
                status = status.as_u16(),
                "Lead endpoint rejected submission"
            );
            Err(SubmissionError::Status(status.as_u16()))
        }
    }
}
