use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::constellation::ConstellationRequest;
use crate::controller::ControllerState;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[utoipa::path(
    get,
    path = "/api/state",
    tag = "constellation",
    responses(
        (status = 200, description = "Current controller state", body = ControllerState)
    )
)]
pub async fn get_state(State(state): State<AppState>) -> Json<ControllerState> {
    Json(state.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/build",
    tag = "constellation",
    request_body = ConstellationRequest,
    responses(
        (status = 202, description = "Submission accepted", body = ControllerState),
        (status = 409, description = "A submission is already in flight", body = ErrorResponse)
    )
)]
pub async fn build(
    State(state): State<AppState>,
    Json(request): Json<ConstellationRequest>,
) -> ApiResult<(StatusCode, Json<ControllerState>)> {
    let snapshot = state.start_submission(request).await?;
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

#[utoipa::path(
    get,
    path = "/api/service/health",
    tag = "constellation",
    responses(
        (status = 200, description = "Generation service is reachable", body = HealthResponse),
        (status = 502, description = "Generation service is down or unhealthy", body = ErrorResponse)
    )
)]
pub async fn service_health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    state.client.health().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        service: state.client.base_url().to_string(),
    }))
}
