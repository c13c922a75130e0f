pub mod alert;
pub mod api;
pub mod auth;
pub mod machine;
pub mod maintenance;
