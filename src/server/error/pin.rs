use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum PinError {
    #[error("PIN must be at least {0} characters long")]
    TooShort(usize),
    #[error("Failed to write PIN file: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for PinError {
    fn into_response(self) -> Response {
        match self {
            Self::TooShort(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            Self::Storage(_) => InternalServerError(self).into_response(),
        }
    }
}
