use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::underwriting::router::{assess_handler, underwriting_router};

fn post_json(path: &str, payload: &Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn catalog_route_lists_tools() {
    let response = underwriting_router()
        .oneshot(
            Request::get("/api/v1/underwriting/tools")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let tools = payload.as_array().expect("catalog is an array");
    assert_eq!(tools.len(), 12);
    assert_eq!(
        tools[0].get("name").and_then(Value::as_str),
        Some("compute_debt_to_income_ratio")
    );
}

#[tokio::test]
async fn invoke_route_executes_a_tool() {
    let response = underwriting_router()
        .oneshot(post_json(
            "/api/v1/underwriting/tools/compute_debt_to_income_ratio",
            &json!({"monthly_income": 50000.0, "total_monthly_debt": 15000.0}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({"ratio": 0.3, "percentage": 30.0, "risk_category": "LOW"})
    );
}

#[tokio::test]
async fn domain_rejections_ship_as_result_records() {
    let response = underwriting_router()
        .oneshot(post_json(
            "/api/v1/underwriting/tools/compute_emi",
            &json!({"principal": 1000000.0, "annual_interest_rate": 10.0, "tenure_months": 0}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({"error": "Tenure must be at least 1 month"})
    );
}

#[tokio::test]
async fn unknown_tool_returns_not_found() {
    let response = underwriting_router()
        .oneshot(post_json(
            "/api/v1/underwriting/tools/compute_magic_score",
            &json!({}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("unknown tool 'compute_magic_score'")
    );
}

#[tokio::test]
async fn malformed_parameters_return_unprocessable() {
    let response = underwriting_router()
        .oneshot(post_json(
            "/api/v1/underwriting/tools/compute_debt_to_income_ratio",
            &json!({"monthly_income": 50000.0}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .starts_with("invalid parameters for compute_debt_to_income_ratio:"));
}

#[tokio::test]
async fn assess_route_returns_the_report() {
    let profile = serde_json::to_value(strong_profile()).expect("profile serializes");

    let response = underwriting_router()
        .oneshot(post_json("/api/v1/underwriting/assess", &profile))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .pointer("/classification/overall_category")
            .and_then(Value::as_str),
        Some("LOW")
    );
    assert_eq!(
        payload.pointer("/composite/total_score"),
        Some(&json!(76.39))
    );
    assert_eq!(
        payload.pointer("/composite/grade").and_then(Value::as_str),
        Some("B")
    );
}

#[tokio::test]
async fn assess_route_rejects_invalid_profiles() {
    let mut profile = minimal_profile();
    profile.monthly_income = 0.0;
    let payload = serde_json::to_value(profile).expect("profile serializes");

    let response = underwriting_router()
        .oneshot(post_json("/api/v1/underwriting/assess", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("Monthly income must be greater than zero")
    );
}

#[tokio::test]
async fn assess_handler_answers_directly() {
    let response = assess_handler(axum::Json(minimal_profile())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .pointer("/classification/total_risk_points")
            .and_then(Value::as_u64),
        Some(2)
    );
}
