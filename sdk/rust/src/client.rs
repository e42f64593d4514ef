use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub base: Option<String>,
    pub timeline: Option<String>,
    #[serde(default)]
    pub addons: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub form: String,
    pub quote: QuoteFigures,
    pub display_total: String,
    pub total_field: String,
    pub breakdown: Vec<serde_json::Value>,
    pub phase: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteFigures {
    pub base_amount: u64,
    pub timeline_multiplier: f64,
    pub addon_total: u64,
    pub total: u64,
}

pub struct EstimatorClient {
    client: Client,
    base_url: String,
}

impl EstimatorClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the grouped option catalog of a form ("website", "design" or "photo").
    pub async fn catalog(&self, form: &str) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let resp = self.client
            .get(format!("{}/api/v1/catalog/{}", self.base_url, form))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Estimator returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Price a selection.
    pub async fn quote(&self, form: &str, req: &QuoteRequest) -> Result<QuoteResponse, Box<dyn std::error::Error>> {
        let resp = self.post_quote(form, req).await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Estimator returned error status {}: {}", status, text).into());
        }

        match serde_json::from_str::<QuoteResponse>(&text) {
            Ok(quote_resp) => Ok(quote_resp),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw quote request, for callers that inspect error statuses themselves.
    pub async fn post_quote(&self, form: &str, req: &QuoteRequest) -> Result<Response, reqwest::Error> {
        self.client
            .post(format!("{}/api/v1/quote/{}", self.base_url, form))
            .json(req)
            .send()
            .await
    }

    /// Check service health.
    pub async fn health(&self) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
    }
}
