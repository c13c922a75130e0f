//! Tests for the maintenance record endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use plantwatch::{
    model::maintenance::SaveMaintenanceRecordDto,
    server::controller::maintenance::{
        add_maintenance_record, get_machine_maintenance_records, get_maintenance_record,
        update_maintenance_record,
    },
};

use super::*;

fn record_dto(machine_id: i32) -> SaveMaintenanceRecordDto {
    SaveMaintenanceRecordDto::from(maintenance_factory::mock_maintenance_record_model(
        0, machine_id,
    ))
}

/// Expect 201 Created and the record listed in the machine's history
#[tokio::test]
async fn adds_maintenance_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();
    let state = test.into_app_state(&dir.path().join("pin"));

    let result = add_maintenance_record(State(state.clone()), Json(record_dto(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let result = get_machine_maintenance_records(State(state), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 422 naming the negative cost
#[tokio::test]
async fn rejects_negative_cost() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();
    let mut record = record_dto(1);
    record.cost = -5.0;

    let result = add_maintenance_record(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(record),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = error_body(resp).await;
    assert_eq!(body.reasons, vec!["Cost -5 must be zero or greater".to_string()]);

    Ok(())
}

/// Expect 404 naming the machine when it is not stored
#[tokio::test]
async fn add_returns_not_found_for_unknown_machine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_machine_tables().build().await?;
    let dir = TempDir::new().unwrap();

    let result = add_maintenance_record(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(record_dto(3)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = error_body(resp).await;
    assert_eq!(body.error, "Machine ID 3 not found");

    Ok(())
}

/// Expect 200 OK for an existing record and 404 Not Found otherwise
#[tokio::test]
async fn gets_maintenance_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let record = test.maintenance().insert_mock_maintenance_record(1).await?;
    let dir = TempDir::new().unwrap();
    let state = test.into_app_state(&dir.path().join("pin"));

    let result = get_maintenance_record(State(state.clone()), Path(record.id)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_maintenance_record(State(state), Path(record.id + 1)).await;
    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 404 Not Found when updating a record that does not exist
#[tokio::test]
async fn update_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();

    let result = update_maintenance_record(
        State(test.into_app_state(&dir.path().join("pin"))),
        Path(6),
        Json(record_dto(1)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
