//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/machines`, `POST /api/machines` - List and add machines
/// - `GET /api/machines/{id}`, `PUT /api/machines/{id}` - Get and update a machine
/// - `GET /api/machines/{id}/maintenance` - Maintenance history of a machine
/// - `GET /api/machines/{id}/alerts` - Alerts of a machine, `?active=true` for active only
/// - `POST /api/maintenance`, `GET /api/maintenance/{id}`, `PUT /api/maintenance/{id}`
/// - `GET /api/alerts/active` - Active alerts of every machine
/// - `POST /api/alerts`, `GET /api/alerts/{id}`, `PUT /api/alerts/{id}`
/// - `POST /api/auth/pin`, `PUT /api/auth/pin` - Check and change the application PIN
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, ready for `with_state`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, pin_service };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Plantwatch", description = "Plantwatch machine maintenance API"), tags(
        (name = controller::machine::MACHINE_TAG, description = "Machine inventory API routes"),
        (name = controller::maintenance::MAINTENANCE_TAG, description = "Maintenance history API routes"),
        (name = controller::alert::ALERT_TAG, description = "Machine alert API routes"),
        (name = controller::auth::AUTH_TAG, description = "Application PIN API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::machine::get_machines,
            controller::machine::add_machine
        ))
        .routes(routes!(
            controller::machine::get_machine,
            controller::machine::update_machine
        ))
        .routes(routes!(
            controller::maintenance::get_machine_maintenance_records
        ))
        .routes(routes!(controller::maintenance::add_maintenance_record))
        .routes(routes!(
            controller::maintenance::get_maintenance_record,
            controller::maintenance::update_maintenance_record
        ))
        .routes(routes!(controller::alert::get_machine_alerts))
        .routes(routes!(controller::alert::get_active_alerts))
        .routes(routes!(controller::alert::add_alert))
        .routes(routes!(
            controller::alert::get_alert,
            controller::alert::update_alert
        ))
        .routes(routes!(
            controller::auth::validate_pin,
            controller::auth::change_pin
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
