use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use super::report::{assess_profile, ApplicantProfile};
use super::tools::{catalog, invoke, ToolCallError};

/// Router builder exposing the calculator and assessment endpoints. Handlers
/// hold no state; every response is a pure function of the request.
pub fn underwriting_router() -> Router {
    Router::new()
        .route("/api/v1/underwriting/tools", get(catalog_handler))
        .route(
            "/api/v1/underwriting/tools/:tool_name",
            post(invoke_handler),
        )
        .route("/api/v1/underwriting/assess", post(assess_handler))
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, Json(catalog())).into_response()
}

/// Domain rejections are part of a tool's result contract and ship as a 200
/// with an `error` field; only transport-level mistakes get a 4xx.
pub(crate) async fn invoke_handler(
    Path(tool_name): Path<String>,
    Json(params): Json<Value>,
) -> Response {
    match invoke(&tool_name, params) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(ToolCallError::Input(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error @ ToolCallError::UnknownTool(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error @ ToolCallError::InvalidParams { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn assess_handler(Json(profile): Json<ApplicantProfile>) -> Response {
    match assess_profile(&profile) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
