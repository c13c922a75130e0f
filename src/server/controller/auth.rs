use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{ChangePinDto, PinDto, PinResultDto},
    },
    server::{error::Error, model::app::AppState},
};

pub static AUTH_TAG: &str = "auth";

/// Check the application PIN
///
/// # Responses
/// - 200 (OK): The PIN matches
/// - 401 (Unauthorized): The PIN is empty or does not match
#[utoipa::path(
    post,
    path = "/api/auth/pin",
    tag = AUTH_TAG,
    request_body = PinDto,
    responses(
        (status = 200, description = "PIN accepted", body = PinResultDto),
        (status = 401, description = "PIN rejected", body = PinResultDto)
    ),
)]
pub async fn validate_pin(
    State(state): State<AppState>,
    Json(payload): Json<PinDto>,
) -> impl IntoResponse {
    let success = state.pin_service.validate_pin(&payload.pin).await;

    let status = if success {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (status, Json(PinResultDto { success }))
}

/// Change the application PIN
///
/// # Responses
/// - 200 (OK): The new PIN was stored
/// - 403 (Forbidden): The current PIN does not match or the new PIN is shorter than four characters
/// - 500 (Internal Server Error): The PIN file could not be written
#[utoipa::path(
    put,
    path = "/api/auth/pin",
    tag = AUTH_TAG,
    request_body = ChangePinDto,
    responses(
        (status = 200, description = "PIN changed", body = PinResultDto),
        (status = 403, description = "PIN change refused", body = PinResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_pin(
    State(state): State<AppState>,
    Json(payload): Json<ChangePinDto>,
) -> Result<impl IntoResponse, Error> {
    let success = state
        .pin_service
        .change_pin(&payload.current_pin, &payload.new_pin)
        .await?;

    let status = if success {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    };

    Ok((status, Json(PinResultDto { success })))
}
