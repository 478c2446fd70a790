//! Configuration settings structures

use roical_types::SecretString;
use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub mail: MailSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8001,
		}
	}
}

/// Mail transport configuration
///
/// Credentials are expected to come from the environment (`ROI_MAIL__USERNAME`,
/// `ROI_MAIL__PASSWORD`), not from a checked-in config file.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MailSettings {
	pub smtp_host: String,
	pub smtp_port: u16,
	pub username: String,
	pub password: SecretString,
	/// Sender address; falls back to `username` when unset
	pub sender: Option<String>,
	/// Fixed recipient for lead notifications
	pub recipient: String,
}

impl Default for MailSettings {
	fn default() -> Self {
		Self {
			smtp_host: "smtp.gmail.com".to_string(),
			smtp_port: 465,
			username: String::new(),
			password: SecretString::default(),
			sender: None,
			recipient: "sales@example.com".to_string(),
		}
	}
}

impl MailSettings {
	/// Whether transport credentials are present (not whether they are valid)
	pub fn is_configured(&self) -> bool {
		!self.username.is_empty() && !self.password.is_empty()
	}

	/// Address to use in the From header
	pub fn sender(&self) -> &str {
		self.sender.as_deref().unwrap_or(&self.username)
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	#[default]
	Compact,
}

impl Settings {
	/// Socket address string for the HTTP listener
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.bind_address(), "0.0.0.0:8001");
		assert_eq!(settings.mail.smtp_port, 465);
		assert!(!settings.mail.is_configured());
		assert_eq!(settings.logging.format, LogFormat::Compact);
	}

	#[test]
	fn test_mail_configured_requires_both_credentials() {
		let mut mail = MailSettings {
			username: "bot@example.com".to_string(),
			..MailSettings::default()
		};
		assert!(!mail.is_configured());
		mail.password = "app-password".into();
		assert!(mail.is_configured());
	}

	#[test]
	fn test_sender_falls_back_to_username() {
		let mut mail = MailSettings {
			username: "bot@example.com".to_string(),
			..MailSettings::default()
		};
		assert_eq!(mail.sender(), "bot@example.com");
		mail.sender = Some("roi@example.com".to_string());
		assert_eq!(mail.sender(), "roi@example.com");
	}

	#[test]
	fn test_partial_settings_deserialize_with_defaults() {
		let json = r#"{ "server": { "port": 9000 } }"#;
		let settings: Settings = serde_json::from_str(json).unwrap();
		assert_eq!(settings.server.port, 9000);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert_eq!(settings.mail.smtp_host, "smtp.gmail.com");
	}

	#[test]
	fn test_password_not_serialized_in_clear() {
		let mut settings = Settings::default();
		settings.mail.password = "super-secret".into();
		let dumped = serde_json::to_string(&settings).unwrap();
		assert!(!dumped.contains("super-secret"));
	}
}
