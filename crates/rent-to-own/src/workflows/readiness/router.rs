use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::analysis::{BatchPolicy, ReadinessAnalysis};
use super::report::AnalysisReport;
use crate::workflows::roster::RosterImporter;

/// Body accepted by the analysis endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// Roster in the same CSV layout the CLI loader reads.
    pub roster_csv: String,
    #[serde(default)]
    pub top_n: Option<i64>,
    #[serde(default)]
    pub skip_invalid: bool,
    #[serde(default)]
    pub include_messages: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteDefaults {
    pub(crate) top_n: u32,
    pub(crate) batch_policy: BatchPolicy,
}

/// Router exposing the roster analysis endpoint.
///
/// `default_top_n` and `default_policy` apply when a request leaves
/// `top_n` unset or `skip_invalid` false.
pub fn readiness_router(default_top_n: u32, default_policy: BatchPolicy) -> Router {
    Router::new()
        .route("/api/v1/readiness/analysis", post(analysis_handler))
        .with_state(Arc::new(RouteDefaults {
            top_n: default_top_n,
            batch_policy: default_policy,
        }))
}

pub(crate) async fn analysis_handler(
    State(defaults): State<Arc<RouteDefaults>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response {
    let AnalysisRequest {
        roster_csv,
        top_n,
        skip_invalid,
        include_messages,
    } = request;

    let records = match RosterImporter::from_reader(Cursor::new(roster_csv.into_bytes())) {
        Ok(records) => records,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let policy = if skip_invalid {
        BatchPolicy::SkipInvalid
    } else {
        defaults.batch_policy
    };

    let analysis = match ReadinessAnalysis::from_records(records, policy) {
        Ok(analysis) => analysis,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let top_n = top_n.unwrap_or_else(|| i64::from(defaults.top_n));
    match AnalysisReport::build(&analysis, top_n, include_messages, Local::now()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
