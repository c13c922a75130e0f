//! Data access layer repositories.
//!
//! This module contains the database repository implementations for the application.
//! Repositories provide an abstraction layer over SeaORM, one per table: machines,
//! maintenance records and alerts. They perform no validation of their own; callers are
//! expected to have validated the submitted fields beforehand.

pub mod alert;
pub mod machine;
pub mod maintenance;
