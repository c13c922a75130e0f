//! Utility functions shared by the validation rules and services.
//!
//! This module provides date and time helpers used to decide whether submitted dates
//! lie within the allowed windows and whether a machine's maintenance is due.

pub mod time;
