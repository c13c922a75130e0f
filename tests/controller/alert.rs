//! Tests for the alert endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::AlertStatus;
use plantwatch::{
    model::alert::SaveAlertDto,
    server::controller::alert::{
        add_alert, get_active_alerts, get_alert, get_machine_alerts, update_alert,
        AlertFilterParams,
    },
};

use super::*;

/// Expect 201 Created when raising a valid alert without a creation time
#[tokio::test]
async fn adds_alert() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();
    let mut alert = SaveAlertDto::from(alert_factory::mock_alert_model(0, 1));
    alert.created_date = None;

    let result = add_alert(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(alert),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 naming the machine when it is not stored
#[tokio::test]
async fn add_returns_not_found_for_unknown_machine() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();
    let alert = SaveAlertDto::from(alert_factory::mock_alert_model(0, 999));

    let result = add_alert(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(alert),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = error_body(resp).await;
    assert_eq!(body.error, "Machine ID 999 not found");

    Ok(())
}

/// Expect 422 when the alert has no title
#[tokio::test]
async fn rejects_blank_title() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let dir = TempDir::new().unwrap();
    let mut alert = SaveAlertDto::from(alert_factory::mock_alert_model(0, 1));
    alert.title = " ".to_string();

    let result = add_alert(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(alert),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = error_body(resp).await;
    assert_eq!(body.reasons, vec!["Title is required".to_string()]);

    Ok(())
}

/// Expect the listing endpoints to respond 200 OK
#[tokio::test]
async fn lists_alerts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    test.alert().insert_mock_alert(1).await?;
    let dir = TempDir::new().unwrap();
    let state = test.into_app_state(&dir.path().join("pin"));

    let result = get_machine_alerts(
        State(state.clone()),
        Path(1),
        Query(AlertFilterParams { active: false }),
    )
    .await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_active_alerts(State(state)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect an acknowledged alert to be returned with 200 OK
#[tokio::test]
async fn acknowledges_alert() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_machine_tables()
        .with_mock_machine(1, "SN-1")
        .build()
        .await?;
    let stored = test.alert().insert_mock_alert(1).await?;
    let dir = TempDir::new().unwrap();
    let state = test.into_app_state(&dir.path().join("pin"));

    let mut alert = SaveAlertDto::from(stored.clone());
    alert.status = AlertStatus::Acknowledged;
    alert.acknowledged_date = Some(stored.created_date);
    alert.acknowledged_by = Some("Jane Doe".to_string());

    let result = update_alert(State(state.clone()), Path(stored.id), Json(alert)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_alert(State(state), Path(stored.id)).await;
    assert!(result.is_ok());

    Ok(())
}

/// Expect 404 Not Found for an alert that does not exist
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_machine_tables().build().await?;
    let dir = TempDir::new().unwrap();

    let result = get_alert(
        State(test.into_app_state(&dir.path().join("pin"))),
        Path(3),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
