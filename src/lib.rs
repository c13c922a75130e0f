//! Plantwatch keeps track of industrial machines, their maintenance history and the
//! alerts raised against them.
//!
//! The crate is split into shared request/response models ([`model`]) and the server
//! side ([`server`]) which validates input, persists it through SeaORM and exposes an
//! HTTP API.

pub mod model;
pub mod server;
