//! ROI Calculator Library
//!
//! A small HTTP service that computes return-on-investment projections from
//! submitted business metrics and emails each lead to a fixed sales
//! recipient, fire-and-forget relative to the HTTP response.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

// Core domain types
pub use roical_types::{
	CalculationInput,
	CalculationResult,
	CalculationValidationError,
	ContactInfo,
	ContactValidationError,
	Document,
	NotificationError,
	OutgoingEmail,
	SecretString,
	SubmissionRequest,
	SubmissionResponse,
};

// Service layer
pub use roical_service::{compose_lead_document, compute, lead_subject, NotificationService};

// Mail transports
pub use roical_mailer::{MailTransport, NoopMailer, SmtpMailer};

// API layer
pub use roical_api::{create_router, AppState};

// Config
pub use roical_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for direct access to the member crates
pub mod types {
	pub use roical_types::*;
}

pub mod config {
	pub use roical_config::*;
}

pub mod mailer {
	pub use roical_mailer::*;
}

pub mod service {
	pub use roical_service::*;
}

pub mod api {
	pub use roical_api::*;
}

/// Builder pattern for configuring and starting the service
///
/// Settings and the mail transport are injected here at startup; there is no
/// ambient configuration state anywhere else in the service.
#[derive(Default)]
pub struct ServerBuilder {
	settings: Option<Settings>,
	transport: Option<Arc<dyn MailTransport>>,
}

impl ServerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use the provided settings instead of loading from file/environment
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use a custom mail transport (tests inject failing/recording transports)
	pub fn with_transport(mut self, transport: Arc<dyn MailTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use roical_config::LogFormat;

		// Env filter from RUST_LOG, falling back to the configured level
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Wire up the service and return the configured router with state
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		let mail_configured = settings.mail.is_configured();

		let transport: Arc<dyn MailTransport> = match self.transport {
			Some(transport) => transport,
			None if mail_configured => Arc::new(SmtpMailer::from_settings(&settings.mail)?),
			None => {
				warn!("SMTP credentials not configured; lead notifications will be dropped");
				Arc::new(NoopMailer)
			},
		};

		let notifier = Arc::new(NotificationService::new(
			transport,
			settings.mail.sender().to_string(),
			settings.mail.recipient.clone(),
		));

		let app_state = AppState {
			notifier,
			mail_configured,
		};

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads `.env` and the config file, initializes tracing, binds the
	/// listener, and serves until shutdown.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.take().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		self.init_tracing_from_settings(&settings)?;
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		info!(
			"Mail transport credentials present: {}",
			settings.mail.is_configured()
		);
		info!("Notification recipient: {}", settings.mail.recipient);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start()?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /calculate");
		info!("  POST /submit");

		axum::serve(listener, app).await?;

		Ok(())
	}
}
