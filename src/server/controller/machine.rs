use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        machine::{MachineDto, SaveMachineDto},
    },
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::machine::MachineService,
    },
};

pub static MACHINE_TAG: &str = "machine";

/// Get all machines ordered by name
#[utoipa::path(
    get,
    path = "/api/machines",
    tag = MACHINE_TAG,
    responses(
        (status = 200, description = "Success when retrieving machines", body = Vec<MachineDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_machines(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let machine_service = MachineService::new(&state.db);

    let machines = machine_service.get_all_machines().await?;

    Ok((StatusCode::OK, Json(machines)))
}

/// Get a machine by ID
#[utoipa::path(
    get,
    path = "/api/machines/{id}",
    tag = MACHINE_TAG,
    params(("id" = i32, Path, description = "Machine ID")),
    responses(
        (status = 200, description = "Success when retrieving the machine", body = MachineDto),
        (status = 404, description = "Machine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_machine(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let machine_service = MachineService::new(&state.db);

    let machine = machine_service
        .get_machine(machine_id)
        .await?
        .ok_or(NotFoundError::Machine(machine_id))?;

    Ok((StatusCode::OK, Json(machine)))
}

/// Add a machine to the inventory
///
/// # Responses
/// - 201 (Created): The machine passed validation and was stored
/// - 422 (Unprocessable Entity): The machine failed one or more rules, all of them are listed
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/machines",
    tag = MACHINE_TAG,
    request_body = SaveMachineDto,
    responses(
        (status = 201, description = "Machine added", body = MachineDto),
        (status = 422, description = "Machine failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_machine(
    State(state): State<AppState>,
    Json(machine): Json<SaveMachineDto>,
) -> Result<impl IntoResponse, Error> {
    let machine_service = MachineService::new(&state.db);

    let machine = machine_service.add_machine(&machine).await?;

    Ok((StatusCode::CREATED, Json(machine)))
}

/// Update a machine
///
/// A maintenance alert is raised when the updated machine's maintenance is overdue or due
/// within a week.
///
/// # Responses
/// - 200 (OK): The machine passed validation and was updated
/// - 404 (Not Found): No machine with the provided ID exists
/// - 422 (Unprocessable Entity): The machine failed one or more rules, all of them are listed
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    put,
    path = "/api/machines/{id}",
    tag = MACHINE_TAG,
    params(("id" = i32, Path, description = "Machine ID")),
    request_body = SaveMachineDto,
    responses(
        (status = 200, description = "Machine updated", body = MachineDto),
        (status = 404, description = "Machine not found", body = ErrorDto),
        (status = 422, description = "Machine failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_machine(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
    Json(machine): Json<SaveMachineDto>,
) -> Result<impl IntoResponse, Error> {
    let machine_service = MachineService::new(&state.db);

    let machine = machine_service.update_machine(machine_id, &machine).await?;

    Ok((StatusCode::OK, Json(machine)))
}
