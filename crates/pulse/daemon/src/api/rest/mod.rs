//! REST API: router, shared state, and handlers

pub mod handlers;
pub mod router;
pub mod state;
