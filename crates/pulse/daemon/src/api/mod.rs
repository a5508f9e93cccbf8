//! HTTP API for the Pulse daemon

pub mod rest;

pub use rest::router::create_router;
