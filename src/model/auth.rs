use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PinDto {
    pub pin: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePinDto {
    pub current_pin: String,
    pub new_pin: String,
}

/// Outcome of a PIN check or change
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PinResultDto {
    pub success: bool,
}
