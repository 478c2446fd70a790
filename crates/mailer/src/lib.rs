//! ROI Calculator Mail Transports
//!
//! Abstraction over outbound email delivery, with an SMTP implementation for
//! production and a no-op implementation used when credentials are absent and
//! in tests.

pub mod noop;
pub mod smtp;

use async_trait::async_trait;
use roical_types::{NotificationError, OutgoingEmail};

pub use noop::NoopMailer;
pub use smtp::SmtpMailer;

/// Outbound mail delivery
///
/// Implementations make exactly one delivery attempt per call and report
/// failure through the returned `Result`; retry policy, if any, belongs to
/// the caller.
#[async_trait]
pub trait MailTransport: Send + Sync {
	async fn send(&self, email: &OutgoingEmail) -> Result<(), NotificationError>;
}
