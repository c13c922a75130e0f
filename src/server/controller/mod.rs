//! HTTP controller endpoints for the Plantwatch web API.
//!
//! This module contains the Axum handlers for machines, maintenance records, alerts and
//! the application PIN. Controllers extract the request, delegate to the services and map
//! the outcome to an HTTP response. Business rule failures reach the client as 422
//! responses listing every failed rule, through the `IntoResponse` implementation of
//! [`Error`](crate::server::error::Error). Every handler is annotated with utoipa for the
//! OpenAPI documentation.

pub mod alert;
pub mod auth;
pub mod machine;
pub mod maintenance;
