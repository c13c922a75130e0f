use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{MaintenanceRecordDto, SaveMaintenanceRecordDto},
    },
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::maintenance::MaintenanceService,
    },
};

pub static MAINTENANCE_TAG: &str = "maintenance";

/// Get the maintenance history of a machine, newest first
#[utoipa::path(
    get,
    path = "/api/machines/{id}/maintenance",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Machine ID")),
    responses(
        (status = 200, description = "Success when retrieving maintenance records", body = Vec<MaintenanceRecordDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_machine_maintenance_records(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let maintenance_service = MaintenanceService::new(&state.db);

    let records = maintenance_service
        .get_maintenance_records_by_machine_id(machine_id)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    get,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance record ID")),
    responses(
        (status = 200, description = "Success when retrieving the maintenance record", body = MaintenanceRecordDto),
        (status = 404, description = "Maintenance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_record(
    State(state): State<AppState>,
    Path(record_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let maintenance_service = MaintenanceService::new(&state.db);

    let record = maintenance_service
        .get_maintenance_record(record_id)
        .await?
        .ok_or(NotFoundError::MaintenanceRecord(record_id))?;

    Ok((StatusCode::OK, Json(record)))
}

/// Record a maintenance
///
/// # Responses
/// - 201 (Created): The record passed validation and was stored
/// - 422 (Unprocessable Entity): The record failed one or more rules, all of them are listed
/// - 404 (Not Found): The record references a machine that does not exist
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    request_body = SaveMaintenanceRecordDto,
    responses(
        (status = 201, description = "Maintenance record added", body = MaintenanceRecordDto),
        (status = 404, description = "Machine not found", body = ErrorDto),
        (status = 422, description = "Maintenance record failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_maintenance_record(
    State(state): State<AppState>,
    Json(record): Json<SaveMaintenanceRecordDto>,
) -> Result<impl IntoResponse, Error> {
    let maintenance_service = MaintenanceService::new(&state.db);

    let record = maintenance_service.add_maintenance_record(&record).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance record ID")),
    request_body = SaveMaintenanceRecordDto,
    responses(
        (status = 200, description = "Maintenance record updated", body = MaintenanceRecordDto),
        (status = 404, description = "Maintenance record not found", body = ErrorDto),
        (status = 422, description = "Maintenance record failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance_record(
    State(state): State<AppState>,
    Path(record_id): Path<i32>,
    Json(record): Json<SaveMaintenanceRecordDto>,
) -> Result<impl IntoResponse, Error> {
    let maintenance_service = MaintenanceService::new(&state.db);

    let record = maintenance_service
        .update_maintenance_record(record_id, &record)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}
