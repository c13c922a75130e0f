//! Service layer for business logic.
//!
//! This module contains the services that sit between the HTTP controllers and the
//! repositories. Services run the business rule validation before every write, turn rule
//! failures into [`Error::ValidationRejected`](crate::server::error::Error::ValidationRejected)
//! and raise maintenance alerts when a machine update leaves its maintenance overdue or
//! due soon. The PIN service guards access to the application with a hashed PIN stored on
//! disk.

pub mod alert;
pub mod machine;
pub mod maintenance;
pub mod pin;
