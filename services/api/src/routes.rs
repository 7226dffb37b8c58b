use crate::infra::{load_analysis_blocking, AppState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use rent_to_own::error::AppError;
use rent_to_own::workflows::readiness::report::views::ProspectView;
use rent_to_own::workflows::readiness::{
    readiness_router, BatchPolicy, OutreachTier, ProspectSort, ReadinessAnalysis,
    ReadinessCategory, SummaryStatistics,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RosterQuery {
    #[serde(default)]
    pub(crate) tier: Option<OutreachTier>,
    #[serde(default)]
    pub(crate) sort: ProspectSort,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterResponse {
    pub(crate) summary_stats: SummaryStatistics,
    pub(crate) category_distribution: BTreeMap<ReadinessCategory, usize>,
    pub(crate) renters: Vec<ProspectView>,
}

pub(crate) fn with_readiness_routes(
    default_top_n: u32,
    default_policy: BatchPolicy,
) -> axum::Router {
    readiness_router(default_top_n, default_policy)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/readiness/roster",
            axum::routing::get(roster_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Scores the configured roster file and lists renters in the requested order.
pub(crate) async fn roster_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<RosterResponse>, AppError> {
    let analysis =
        load_analysis_blocking(state.analysis.data_path.clone(), state.analysis.batch_policy)
            .await?;
    Ok(Json(roster_response(&analysis, &query)?))
}

pub(crate) fn roster_response(
    analysis: &ReadinessAnalysis,
    query: &RosterQuery,
) -> Result<RosterResponse, AppError> {
    let summary_stats = analysis.summary()?;
    let renters = analysis
        .sorted_by(query.sort)
        .into_iter()
        .filter(|renter| query.tier.map_or(true, |tier| renter.tier == tier))
        .take(query.limit.unwrap_or(usize::MAX))
        .map(ProspectView::from_renter)
        .collect();

    Ok(RosterResponse {
        summary_stats,
        category_distribution: analysis.category_distribution(),
        renters,
    })
}
