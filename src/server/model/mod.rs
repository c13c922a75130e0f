//! Server-side data models.
//!
//! This module contains the shared application state handed to HTTP handlers and type
//! aliases for the SeaORM entity models used throughout the server.

pub mod app;
pub mod db;
