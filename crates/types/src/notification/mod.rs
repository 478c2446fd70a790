//! Outbound notification models

pub mod document;
pub mod email;
pub mod errors;

pub use document::{Document, Row, Section};
pub use email::OutgoingEmail;
pub use errors::NotificationError;
