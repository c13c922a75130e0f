//! Server application core modules.
//!
//! This module contains all server-side functionality for Plantwatch: HTTP routing, the
//! business rules applied to machines, maintenance records and alerts, database access,
//! maintenance alert generation and PIN protection.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod validation;
