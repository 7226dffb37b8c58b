use super::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::workflows::readiness::analysis::BatchPolicy;
use crate::workflows::readiness::router::readiness_router;

fn analysis_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/api/v1/readiness/analysis")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn analysis_endpoint_returns_report() {
    let response = readiness_router(10, BatchPolicy::Abort)
        .oneshot(analysis_request(json!({
            "roster_csv": roster_csv(&[STRUGGLING_ROW, READY_ROW]),
            "include_messages": true,
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary_stats"]["total_renters"], 2);
    assert_eq!(payload["summary_stats"]["ready_now"], 1);
    assert_eq!(payload["top_prospects"][0]["name"], "Maria Lopez");
    assert_eq!(payload["outreach_messages"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn analysis_endpoint_honors_requested_top_n() {
    let response = readiness_router(10, BatchPolicy::Abort)
        .oneshot(analysis_request(json!({
            "roster_csv": roster_csv(&[STRUGGLING_ROW, READY_ROW]),
            "top_n": 1,
        })))
        .await
        .expect("router responds");

    let payload = read_json_body(response).await;
    assert_eq!(payload["top_prospects"].as_array().map(Vec::len), Some(1));
    assert!(payload.get("outreach_messages").is_none());
}

#[tokio::test]
async fn analysis_endpoint_rejects_malformed_roster() {
    let response = readiness_router(10, BatchPolicy::Abort)
        .oneshot(analysis_request(json!({
            "roster_csv": roster_csv(&["Sam Reed,sam@example.com,555-0102,700,650,95,,9000,3000,2,1200,180000,9000"]),
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("income")));
}

#[tokio::test]
async fn analysis_endpoint_reports_unscorable_records() {
    let response = readiness_router(10, BatchPolicy::Abort)
        .oneshot(analysis_request(json!({
            "roster_csv": roster_csv(&[READY_ROW, ZERO_INCOME_ROW]),
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analysis_endpoint_can_skip_unscorable_records() {
    let response = readiness_router(10, BatchPolicy::Abort)
        .oneshot(analysis_request(json!({
            "roster_csv": roster_csv(&[READY_ROW, ZERO_INCOME_ROW]),
            "skip_invalid": true,
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary_stats"]["total_renters"], 1);
    assert_eq!(payload["rejected_records"][0]["name"], "Ava Chen");
}

#[tokio::test]
async fn analysis_endpoint_rejects_negative_top_n() {
    let response = readiness_router(10, BatchPolicy::Abort)
        .oneshot(analysis_request(json!({
            "roster_csv": roster_csv(&[READY_ROW]),
            "top_n": -1,
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analysis_endpoint_falls_back_to_configured_batch_policy() {
    let response = readiness_router(10, BatchPolicy::SkipInvalid)
        .oneshot(analysis_request(json!({
            "roster_csv": roster_csv(&[READY_ROW, ZERO_INCOME_ROW]),
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary_stats"]["total_renters"], 1);
    assert_eq!(payload["rejected_records"][0]["index"], 1);
    assert_eq!(payload["rejected_records"][0]["name"], "Ava Chen");
}
