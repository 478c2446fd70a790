//! SMTP delivery via lettre

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use roical_config::MailSettings;
use roical_types::{NotificationError, OutgoingEmail};

use crate::MailTransport;

/// Mail transport backed by an authenticated implicit-TLS SMTP relay
pub struct SmtpMailer {
	transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
	/// Build a transport from mail settings
	///
	/// Fails when credentials are missing or the relay host is unusable.
	pub fn from_settings(settings: &MailSettings) -> Result<Self, NotificationError> {
		if !settings.is_configured() {
			return Err(NotificationError::Configuration {
				reason: "SMTP username/password not set".to_string(),
			});
		}

		let credentials = Credentials::new(
			settings.username.clone(),
			settings.password.expose_secret().to_string(),
		);

		let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
			.map_err(|e| NotificationError::Configuration {
				reason: format!("invalid SMTP relay '{}': {}", settings.smtp_host, e),
			})?
			.port(settings.smtp_port)
			.credentials(credentials)
			.build();

		Ok(Self { transport })
	}
}

#[async_trait]
impl MailTransport for SmtpMailer {
	async fn send(&self, email: &OutgoingEmail) -> Result<(), NotificationError> {
		let from: Mailbox =
			email
				.from
				.parse()
				.map_err(|e: lettre::address::AddressError| NotificationError::InvalidAddress {
					field: "from",
					reason: e.to_string(),
				})?;
		let to: Mailbox =
			email
				.to
				.parse()
				.map_err(|e: lettre::address::AddressError| NotificationError::InvalidAddress {
					field: "to",
					reason: e.to_string(),
				})?;

		let message = Message::builder()
			.from(from)
			.to(to)
			.subject(&email.subject)
			.header(ContentType::TEXT_HTML)
			.body(email.html_body.clone())
			.map_err(|e| NotificationError::Composition {
				reason: e.to_string(),
			})?;

		debug!(to = %email.to, subject = %email.subject, "Submitting message to SMTP relay");

		// Single delivery attempt, no retry
		self.transport
			.send(message)
			.await
			.map(|_| ())
			.map_err(|e| NotificationError::Transport {
				reason: e.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_credentials_rejected() {
		let settings = MailSettings::default();
		assert!(matches!(
			SmtpMailer::from_settings(&settings),
			Err(NotificationError::Configuration { .. })
		));
	}

	#[test]
	fn test_configured_settings_build_a_transport() {
		let settings = MailSettings {
			username: "bot@example.com".to_string(),
			password: "app-password".into(),
			..MailSettings::default()
		};
		assert!(SmtpMailer::from_settings(&settings).is_ok());
	}

	#[tokio::test]
	async fn test_invalid_recipient_address_fails_before_delivery() {
		let settings = MailSettings {
			username: "bot@example.com".to_string(),
			password: "app-password".into(),
			..MailSettings::default()
		};
		let mailer = SmtpMailer::from_settings(&settings).unwrap();
		let email = OutgoingEmail {
			from: "bot@example.com".to_string(),
			to: "not an address".to_string(),
			subject: "subject".to_string(),
			html_body: "<html></html>".to_string(),
		};
		assert!(matches!(
			mailer.send(&email).await,
			Err(NotificationError::InvalidAddress { field: "to", .. })
		));
	}
}
