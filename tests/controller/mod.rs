//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, status codes and error bodies for the API endpoints.

mod alert;
mod auth;
mod machine;
mod maintenance;

use axum::{body::to_bytes, response::Response};
use plantwatch::model::api::ErrorDto;
use plantwatch_test_utils::prelude::*;
use tempfile::TempDir;

use crate::util::TestContextExt;

/// Decodes the JSON error body of a response
async fn error_body(resp: Response) -> ErrorDto {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
