//! Project cost estimator for a creative agency.
//!
//! Website, design and photography forms share one pipeline: a static
//! catalog of priced options, a per-form selection state, a pure pricing
//! engine, and a presentation layer that keeps the visible total, the hidden
//! total field and the "what's included" breakdown in sync. Quotes leave the
//! estimator as lead submissions posted to an external endpoint.

pub mod catalog;
pub mod config;
pub mod http;
pub mod leads;
pub mod observability;
pub mod presentation;
pub mod quoting;
pub mod selection;

pub use catalog::{Catalog, FormType};
pub use config::EstimatorConfig;
pub use http::HttpServer;
pub use presentation::Calculator;
pub use quoting::{compute_quote, Quote, QuoteEngine};
pub use selection::SelectionState;
