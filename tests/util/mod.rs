//! Test utilities for creating AppState from a test context

use std::path::Path;

use plantwatch::server::{model::app::AppState, service::pin::PinService};
use plantwatch_test_utils::TestContext;

/// Extension trait for TestContext to create the application state
pub trait TestContextExt {
    /// AppState whose PIN file lives at `pin_file_path`, which does not need to exist
    fn into_app_state(&self, pin_file_path: &Path) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self, pin_file_path: &Path) -> AppState {
        AppState {
            db: self.db.clone(),
            pin_service: PinService::new(pin_file_path),
        }
    }
}
