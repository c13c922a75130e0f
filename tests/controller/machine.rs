//! Tests for the machine endpoints.
//!
//! Verifies listing, retrieval, creation and update of machines, including the 422
//! response listing every failed rule and the maintenance alert raised on update.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Days, Local};
use entity::sea_orm_active_enums::AlertType;
use plantwatch::{
    model::machine::SaveMachineDto,
    server::{
        controller::{
            alert::{get_machine_alerts, AlertFilterParams},
            machine::{add_machine, get_machine, get_machines, update_machine},
        },
        data::alert::AlertRepository,
    },
};

use super::*;

fn machine_dto(serial_number: &str) -> SaveMachineDto {
    SaveMachineDto::from(machine_factory::mock_machine_model(0, serial_number))
}

/// Expect 201 Created when adding a valid machine
#[tokio::test]
async fn adds_machine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_machine_tables().build().await?;
    let dir = TempDir::new().unwrap();

    let result = add_machine(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(machine_dto("SN-100")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 with every failed rule when the machine breaks several rules
#[tokio::test]
async fn rejects_invalid_machine_with_reasons() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-100")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();
    let mut machine = machine_dto("sn-100");
    machine.name = String::new();
    machine.installation_date = Local::now().date_naive() + Days::new(1);

    let result = add_machine(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(machine),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = error_body(resp).await;
    assert_eq!(body.reasons.len(), 3);
    assert!(body.reasons[0].contains("Name"));
    assert!(body.reasons[2].contains("sn-100"));

    Ok(())
}

/// Expect 200 OK with the machines sorted by name
#[tokio::test]
async fn lists_machines() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .with_mock_machine(2, "SN-2")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();

    let result = get_machines(State(test.into_app_state(&dir.path().join("pin")))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a machine that does not exist
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_machine_tables().build().await?;
    let dir = TempDir::new().unwrap();

    let result = get_machine(
        State(test.into_app_state(&dir.path().join("pin"))),
        Path(1),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn list_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = TempDir::new().unwrap();

    let result = get_machines(State(test.into_app_state(&dir.path().join("pin")))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 OK and an active overdue alert listed for the machine after the update
#[tokio::test]
async fn update_raises_overdue_alert() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();
    let today = Local::now().date_naive();
    let mut machine = machine_dto("SN-1");
    machine.last_maintenance_date = Some(today - Days::new(60));
    machine.next_maintenance_date = Some(today - Days::new(30));

    let result = update_machine(
        State(test.into_app_state(&dir.path().join("pin"))),
        Path(1),
        Json(machine),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let alerts = AlertRepository::new(&test.db)
        .get_active_by_machine_id(1)
        .await?;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::MaintenanceOverdue);

    let result = get_machine_alerts(
        State(test.into_app_state(&dir.path().join("pin"))),
        Path(1),
        axum::extract::Query(AlertFilterParams { active: true }),
    )
    .await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when updating a machine that does not exist
#[tokio::test]
async fn update_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_machine_tables().build().await?;
    let dir = TempDir::new().unwrap();

    let result = update_machine(
        State(test.into_app_state(&dir.path().join("pin"))),
        Path(4),
        Json(machine_dto("SN-4")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
