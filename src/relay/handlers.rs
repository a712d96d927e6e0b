//! HTTP handlers of the relay.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::state::RelayState;
use crate::api::AskRequest;
use crate::metrics::{self, HEALTH_CHECKS, RELAY_FAILURES, RELAY_LATENCY, RELAY_REQUESTS};

/// Incoming `/ask` body. A missing question is treated as empty.
#[derive(Debug, Deserialize)]
pub struct AskPayload {
    #[serde(default)]
    pub question: String,
}

fn failure(endpoint: &str, reason: &str) {
    RELAY_FAILURES.with_label_values(&[endpoint, reason]).inc();
}

/// Forward a health check.
///
/// GET /health
pub async fn health(State(state): State<RelayState>) -> Response {
    RELAY_REQUESTS.with_label_values(&["health"]).inc();
    let span = info_span!("relay", request_id = %Uuid::new_v4(), endpoint = "health");
    forward_health(state).instrument(span).await
}

async fn forward_health(state: RelayState) -> Response {
    let unavailable = |detail: String| {
        warn!(%detail, "Backend health check failed");
        failure("health", "unavailable");
        HEALTH_CHECKS.with_label_values(&["unavailable"]).inc();
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "message": format!("Backend unavailable: {}", detail),
            })),
        )
            .into_response()
    };

    let url = match state.endpoint("health") {
        Ok(url) => url,
        Err(e) => return unavailable(e.to_string()),
    };

    let start = Instant::now();
    let response = match state
        .client
        .get(url)
        .timeout(state.health_timeout)
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => return unavailable(e.to_string()),
    };
    RELAY_LATENCY
        .with_label_values(&["health"])
        .observe(start.elapsed().as_secs_f64());

    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match response.json::<Value>().await {
        Ok(body) => {
            info!(status = status.as_u16(), "Health forwarded");
            HEALTH_CHECKS.with_label_values(&["forwarded"]).inc();
            (status, Json(body)).into_response()
        }
        Err(e) => unavailable(e.to_string()),
    }
}

/// Validate and forward a question.
///
/// POST /ask
pub async fn ask(
    State(state): State<RelayState>,
    payload: Result<Json<AskPayload>, JsonRejection>,
) -> Response {
    RELAY_REQUESTS.with_label_values(&["ask"]).inc();
    let span = info_span!("relay", request_id = %Uuid::new_v4(), endpoint = "ask");
    forward_ask(state, payload).instrument(span).await
}

async fn forward_ask(
    state: RelayState,
    payload: Result<Json<AskPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            failure("ask", "invalid_request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid request body",
                    "detail": rejection.body_text(),
                })),
            )
                .into_response();
        }
    };

    let question = payload.question.trim();
    if question.is_empty() {
        failure("ask", "empty_question");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Question cannot be empty" })),
        )
            .into_response();
    }

    let connect_failed = |detail: String| {
        warn!(%detail, "Failed to reach backend");
        failure("ask", "transport");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "Failed to connect to backend",
                "detail": detail,
            })),
        )
            .into_response()
    };

    let url = match state.endpoint("ask") {
        Ok(url) => url,
        Err(e) => return connect_failed(e.to_string()),
    };

    info!(question_len = question.len(), "Forwarding question");
    let start = Instant::now();
    let response = match state
        .client
        .post(url)
        .timeout(state.ask_timeout)
        .json(&AskRequest {
            question: question.to_string(),
        })
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => return connect_failed(e.to_string()),
    };
    RELAY_LATENCY
        .with_label_values(&["ask"])
        .observe(start.elapsed().as_secs_f64());

    let code = response.status().as_u16();
    let text = match response.text().await {
        Ok(t) => t,
        Err(e) => return connect_failed(e.to_string()),
    };

    if code == 200 {
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => {
                info!(took_ms = start.elapsed().as_millis() as u64, "Answer forwarded");
                (StatusCode::OK, Json(body)).into_response()
            }
            Err(e) => {
                error!(error = %e, "Backend answered with invalid JSON");
                failure("ask", "invalid_response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error",
                        "detail": e.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    } else {
        warn!(status = code, "Backend rejected question");
        failure("ask", "backend_status");
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY);
        (
            status,
            Json(json!({
                "error": format!("Backend error: {}", code),
                "detail": text,
            })),
        )
            .into_response()
    }
}

/// Prometheus metrics endpoint.
///
/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    let output = metrics::gather_metrics();
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], output)
}
