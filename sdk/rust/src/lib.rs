//! Client for the agency estimator quote API.

pub mod client;

pub use client::{EstimatorClient, QuoteFigures, QuoteRequest, QuoteResponse};
