//! ROI Calculator API
//!
//! Axum-based HTTP surface: routes, handlers, and middleware.

pub mod handlers;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
