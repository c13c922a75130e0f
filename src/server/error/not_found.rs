use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Machine ID {0} not found")]
    Machine(i32),
    #[error("Maintenance record ID {0} not found")]
    MaintenanceRecord(i32),
    #[error("Alert ID {0} not found")]
    Alert(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::NOT_FOUND, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
