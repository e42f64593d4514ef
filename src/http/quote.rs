//! Catalog and quote handlers.

use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use std::time::Instant;

use crate::catalog::{CategoryGroup, FormType};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::presentation::{Calculator, Projection};
use crate::selection::SelectionSnapshot;

#[derive(Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub form: FormType,
    pub groups: Vec<CategoryGroup>,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

pub async fn get_catalog(
    State(state): State<AppState>,
    Path(form): Path<String>,
) -> Result<Json<CatalogResponse>, ApiError> {
    let start = Instant::now();
    let result = form.parse::<FormType>().map_err(ApiError::from);
    let status = match &result {
        Ok(_) => 200,
        Err(e) => e.status().as_u16(),
    };
    metrics::record_request("catalog", status, start);

    let form = result?;
    Ok(Json(CatalogResponse {
        form,
        groups: state.engine.catalog().grouped(form),
    }))
}

pub async fn create_quote(
    State(state): State<AppState>,
    Path(form): Path<String>,
    Json(snapshot): Json<SelectionSnapshot>,
) -> impl IntoResponse {
    serve_quote(&state, &form, &snapshot).map(Json)
}

/// Price a snapshot and record the request outcome.
fn serve_quote(
    state: &AppState,
    form: &str,
    snapshot: &SelectionSnapshot,
) -> Result<Projection, ApiError> {
    let start = Instant::now();
    let result = quote_snapshot(state, form, snapshot);
    match &result {
        Ok(projection) => {
            metrics::record_quote(projection.form);
            metrics::record_request("quote", 200, start);
        }
        Err(e) => {
            if let ApiError::InvalidOption(invalid) = e {
                metrics::record_invalid_option(invalid.form);
            }
            tracing::warn!(form = %form, error = %e, "Quote request rejected");
            metrics::record_request("quote", e.status().as_u16(), start);
        }
    }
    result
}

fn quote_snapshot(
    state: &AppState,
    form: &str,
    snapshot: &SelectionSnapshot,
) -> Result<Projection, ApiError> {
    let form: FormType = form.parse()?;
    let calculator = Calculator::from_snapshot(form, *state.engine.catalog(), snapshot)?;
    Ok(calculator.projection().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::metrics::{
        Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };
    use std::sync::{Arc, Mutex};

    use crate::quoting::QuoteEngine;

    /// Remembers the name of every counter touched.
    #[derive(Default)]
    struct CounterNames(Mutex<Vec<String>>);

    impl Recorder for CounterNames {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            self.0.lock().unwrap().push(key.name().to_string());
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    fn state() -> AppState {
        AppState {
            engine: Arc::new(QuoteEngine::default()),
        }
    }

    fn counters_for(form: &str, snapshot: &SelectionSnapshot) -> Vec<String> {
        let recorder = CounterNames::default();
        ::metrics::with_local_recorder(&recorder, || {
            let _ = serve_quote(&state(), form, snapshot);
        });
        recorder.0.into_inner().unwrap()
    }

    #[test]
    fn test_invalid_option_is_counted() {
        let snapshot = SelectionSnapshot {
            base: Some("logo-design".into()),
            ..Default::default()
        };
        assert_eq!(counters_for("design", &snapshot), vec!["estimator_invalid_options_total"]);
    }

    #[test]
    fn test_unknown_form_is_not_an_invalid_option() {
        assert!(counters_for("video", &SelectionSnapshot::default()).is_empty());
    }

    #[test]
    fn test_quote_is_counted() {
        let snapshot = SelectionSnapshot {
            base: Some("headshot-session".into()),
            ..Default::default()
        };
        assert_eq!(counters_for("photo", &snapshot), vec!["estimator_quotes_total"]);
    }
}
