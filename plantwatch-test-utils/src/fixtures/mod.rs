//! Test fixture modules.
//!
//! Each submodule provides a `factory` of in-memory entity models with standard test values
//! and fixture methods on [`TestContext`](crate::TestContext) inserting them:
//!
//! - `machine` - Machines
//! - `maintenance` - Maintenance records
//! - `alert` - Alerts

pub mod alert;
pub mod machine;
pub mod maintenance;
