use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::state::AppState;

/// GET /health response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
	pub status: &'static str,
	pub service: &'static str,
	pub mail_configured: bool,
}

/// GET /health - liveness plus whether mail credentials are present
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "healthy",
		service: "roi-calculator",
		mail_configured: state.mail_configured,
	})
}
