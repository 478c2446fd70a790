//! Error types for notification delivery

use thiserror::Error;

/// Errors raised while composing or delivering a notification email
///
/// These never cross the HTTP boundary: the notifier logs them and the
/// submission response is unaffected.
#[derive(Error, Debug)]
pub enum NotificationError {
	#[error("Invalid mail address for {field}: {reason}")]
	InvalidAddress { field: &'static str, reason: String },

	#[error("Failed to compose message: {reason}")]
	Composition { reason: String },

	#[error("Mail transport failure: {reason}")]
	Transport { reason: String },

	#[error("Mail transport not configured: {reason}")]
	Configuration { reason: String },
}
