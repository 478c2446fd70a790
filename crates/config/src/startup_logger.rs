//! Service startup logging

use std::env;
use tracing::info;

/// Log service identification and environment details at startup
pub fn log_service_info() {
	let service_name = "roi-calculator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== ROI Calculator Service Starting ===");
	info!("Service: {} v{}", service_name, service_version);
	info!("Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("Log filter override: {}", rust_log);
	}

	info!(
		"Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Log startup completion
pub fn log_startup_complete(bind_address: &str) {
	info!("ROI Calculator Service started successfully");
	info!("Server listening on: {}", bind_address);
	info!("Ready to accept requests");
}
