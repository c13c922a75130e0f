use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A single business rule a submitted machine, maintenance record or alert failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    BlankField(&'static str),
    #[error("Installation date {installation_date} cannot be later than today ({today})")]
    InstallationDateInFuture {
        installation_date: NaiveDate,
        today: NaiveDate,
    },
    #[error("Next maintenance date {next} cannot be earlier than last maintenance date {last}")]
    NextMaintenanceBeforeLast { last: NaiveDate, next: NaiveDate },
    #[error("Serial number {0:?} is already used by another machine")]
    DuplicateSerialNumber(String),
    #[error("Machine ID {0} is not a valid machine reference")]
    InvalidMachineId(i32),
    #[error("Maintenance date {maintenance_date} is later than the scheduling limit of {latest}")]
    MaintenanceDateTooFarAhead {
        maintenance_date: NaiveDate,
        latest: NaiveDate,
    },
    #[error("Completed date {completed_date} cannot be earlier than maintenance date {maintenance_date}")]
    CompletedBeforeMaintenance {
        maintenance_date: NaiveDate,
        completed_date: NaiveDate,
    },
    #[error("Cost {0} must be zero or greater")]
    NegativeCost(f64),
    #[error("Created date {created_date} is later than the allowed limit of {latest}")]
    CreatedDateInFuture {
        created_date: NaiveDateTime,
        latest: NaiveDateTime,
    },
    #[error("Acknowledged date {acknowledged_date} cannot be earlier than created date {created_date}")]
    AcknowledgedBeforeCreated {
        created_date: NaiveDateTime,
        acknowledged_date: NaiveDateTime,
    },
    #[error("Resolved date {resolved_date} cannot be earlier than created date {created_date}")]
    ResolvedBeforeCreated {
        created_date: NaiveDateTime,
        resolved_date: NaiveDateTime,
    },
    #[error("{field} cannot be longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Joins failed rules into a single line for logs and error messages
pub fn describe(reasons: &[ValidationError]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds the 422 response listing every failed rule so the caller can show them all at once
pub fn rejected_response(reasons: Vec<ValidationError>) -> Response {
    tracing::debug!(reasons = %describe(&reasons), "Rejected submitted data");

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorDto {
            error: "Submitted data failed validation".to_string(),
            reasons: reasons.iter().map(ToString::to_string).collect(),
        }),
    )
        .into_response()
}
