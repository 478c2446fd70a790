//! No-op mail transport

use async_trait::async_trait;
use tracing::info;

use roical_types::{NotificationError, OutgoingEmail};

use crate::MailTransport;

/// Transport that drops every message, used when no SMTP credentials are
/// configured so the rest of the service keeps working
#[derive(Debug, Default, Clone)]
pub struct NoopMailer;

#[async_trait]
impl MailTransport for NoopMailer {
	async fn send(&self, email: &OutgoingEmail) -> Result<(), NotificationError> {
		info!(
			to = %email.to,
			subject = %email.subject,
			"Mail transport not configured; dropping notification email"
		);
		Ok(())
	}
}
