use std::sync::Arc;

use roical_service::NotificationService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub notifier: Arc<NotificationService>,
	/// Whether SMTP credentials were present at startup; reported by /health
	pub mail_configured: bool,
}
