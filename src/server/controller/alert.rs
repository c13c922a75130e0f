use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        alert::{AlertDto, SaveAlertDto},
        api::ErrorDto,
    },
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::alert::AlertService,
    },
};

pub static ALERT_TAG: &str = "alert";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlertFilterParams {
    /// Only return alerts that are still active
    #[serde(default)]
    pub active: bool,
}

/// Get the alerts of a machine, newest first
#[utoipa::path(
    get,
    path = "/api/machines/{id}/alerts",
    tag = ALERT_TAG,
    params(("id" = i32, Path, description = "Machine ID"), AlertFilterParams),
    responses(
        (status = 200, description = "Success when retrieving alerts", body = Vec<AlertDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_machine_alerts(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
    Query(params): Query<AlertFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let alert_service = AlertService::new(&state.db);

    let alerts = if params.active {
        alert_service
            .get_active_alerts_by_machine_id(machine_id)
            .await?
    } else {
        alert_service.get_alerts_by_machine_id(machine_id).await?
    };

    Ok((StatusCode::OK, Json(alerts)))
}

/// Get the active alerts of every machine, newest first
#[utoipa::path(
    get,
    path = "/api/alerts/active",
    tag = ALERT_TAG,
    responses(
        (status = 200, description = "Success when retrieving active alerts", body = Vec<AlertDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_alerts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let alert_service = AlertService::new(&state.db);

    let alerts = alert_service.get_all_active_alerts().await?;

    Ok((StatusCode::OK, Json(alerts)))
}

#[utoipa::path(
    get,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = i32, Path, description = "Alert ID")),
    responses(
        (status = 200, description = "Success when retrieving the alert", body = AlertDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let alert_service = AlertService::new(&state.db);

    let alert = alert_service
        .get_alert(alert_id)
        .await?
        .ok_or(NotFoundError::Alert(alert_id))?;

    Ok((StatusCode::OK, Json(alert)))
}

/// Raise an alert for a machine
///
/// # Responses
/// - 201 (Created): The alert passed validation and was stored
/// - 422 (Unprocessable Entity): The alert failed one or more rules, all of them are listed
/// - 404 (Not Found): The alert references a machine that does not exist
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/alerts",
    tag = ALERT_TAG,
    request_body = SaveAlertDto,
    responses(
        (status = 201, description = "Alert raised", body = AlertDto),
        (status = 404, description = "Machine not found", body = ErrorDto),
        (status = 422, description = "Alert failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_alert(
    State(state): State<AppState>,
    Json(alert): Json<SaveAlertDto>,
) -> Result<impl IntoResponse, Error> {
    let alert_service = AlertService::new(&state.db);

    let alert = alert_service.add_alert(&alert).await?;

    Ok((StatusCode::CREATED, Json(alert)))
}

/// Update an alert, typically to acknowledge or resolve it
#[utoipa::path(
    put,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = i32, Path, description = "Alert ID")),
    request_body = SaveAlertDto,
    responses(
        (status = 200, description = "Alert updated", body = AlertDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 422, description = "Alert failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<i32>,
    Json(alert): Json<SaveAlertDto>,
) -> Result<impl IntoResponse, Error> {
    let alert_service = AlertService::new(&state.db);

    let alert = alert_service.update_alert(alert_id, &alert).await?;

    Ok((StatusCode::OK, Json(alert)))
}
