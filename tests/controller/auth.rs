//! Tests for the PIN endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use plantwatch::{
    model::auth::{ChangePinDto, PinDto},
    server::controller::auth::{change_pin, validate_pin},
};

use super::*;

/// Expect the default PIN to be accepted and any other PIN refused while no PIN is set
#[tokio::test]
async fn validates_default_pin() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = TempDir::new().unwrap();
    let state = test.into_app_state(&dir.path().join("pin"));

    let resp = validate_pin(
        State(state.clone()),
        Json(PinDto {
            pin: "1234".to_string(),
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = validate_pin(
        State(state),
        Json(PinDto {
            pin: "0000".to_string(),
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the new PIN to be accepted after a change
#[tokio::test]
async fn changes_pin() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = TempDir::new().unwrap();
    let state = test.into_app_state(&dir.path().join("nested").join("pin"));

    let result = change_pin(
        State(state.clone()),
        Json(ChangePinDto {
            current_pin: "1234".to_string(),
            new_pin: "55555".to_string(),
        }),
    )
    .await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let resp = validate_pin(
        State(state),
        Json(PinDto {
            pin: "55555".to_string(),
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden when the current PIN does not match
#[tokio::test]
async fn refuses_change_with_wrong_pin() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = TempDir::new().unwrap();

    let result = change_pin(
        State(test.into_app_state(&dir.path().join("pin"))),
        Json(ChangePinDto {
            current_pin: "9999".to_string(),
            new_pin: "55555".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}
