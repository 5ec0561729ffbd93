use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::analysis::router::{analyze_handler, rules_handler, AnalyzeRequest};
use crate::analysis::{analysis_router, CaseType};

fn json_request(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn analyze_handler_returns_analysis_and_summary() {
    let response = analyze_handler(
        State(shared_engine()),
        axum::Json(AnalyzeRequest {
            report: THEFT_REPORT.to_string(),
        }),
    )
    .await;

    assert_eq!(response.0.rule_set_version, "2024.1");
    assert_eq!(response.0.analysis.case_type(), CaseType::Theft);
    assert_eq!(response.0.summary, "Theft (medium priority), no risk factors");
}

#[tokio::test]
async fn rules_handler_lists_case_types_in_tie_break_order() {
    let response = rules_handler(State(shared_engine())).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["version"], "2024.1");
    assert_eq!(
        payload["case_types"],
        json!(["assault", "cybercrime", "theft", "fraud", "harassment", "vandalism"])
    );
}

#[tokio::test]
async fn analyze_route_serializes_camel_case_analysis() {
    let router = analysis_router(shared_engine());

    let response = router
        .oneshot(json_request(
            "/api/v1/cases/analyze",
            json!({ "report": RANSOMWARE_REPORT }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let analysis = &payload["analysis"];
    assert_eq!(analysis["caseType"], "cybercrime");
    assert_eq!(analysis["priority"], "critical");
    assert_eq!(analysis["riskFactors"], json!(["Threat of violence"]));
    assert!(analysis["digitalTrails"]
        .as_array()
        .is_some_and(|trails| !trails.is_empty()));
    assert!(payload.get("analyzed_at").is_some());
}

#[tokio::test]
async fn analyze_route_rejects_non_text_reports() {
    let router = analysis_router(shared_engine());

    let response = router
        .oneshot(json_request(
            "/api/v1/cases/analyze",
            json!({ "report": 42 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn batch_route_keeps_case_ids_in_order() {
    let router = analysis_router(shared_engine());

    let response = router
        .oneshot(json_request(
            "/api/v1/cases/analyze/batch",
            json!({
                "reports": [
                    { "case_id": "INC-7", "report": "" },
                    { "case_id": "INC-8", "report": THEFT_REPORT },
                ]
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let results = payload["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["case_id"], "INC-7");
    assert_eq!(results[0]["analysis"]["caseType"], "unclassified");
    assert_eq!(results[1]["case_id"], "INC-8");
    assert_eq!(results[1]["analysis"]["caseType"], "theft");
}
