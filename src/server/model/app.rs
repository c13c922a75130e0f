use sea_orm::DatabaseConnection;

use crate::server::service::pin::PinService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub pin_service: PinService,
}
