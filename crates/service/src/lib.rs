//! ROI Calculator Service
//!
//! Core logic: the pure ROI computation and the lead notification pipeline.

pub mod calculator;
pub mod notifier;

pub use calculator::compute;
pub use notifier::{compose_lead_document, lead_subject, NotificationService};
