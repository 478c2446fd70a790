use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{validation_error, ErrorResponse};
use crate::state::AppState;
use roical_types::{SubmissionRequest, SubmissionResponse};

/// POST /submit - Compute, acknowledge, and schedule the lead notification
///
/// The notification is fire-and-forget: it is spawned onto the runtime and
/// its outcome never affects this response. The 200 acknowledges acceptance,
/// not delivery.
pub async fn post_submit(
	State(state): State<AppState>,
	Json(request): Json<SubmissionRequest>,
) -> Result<Json<SubmissionResponse>, (StatusCode, Json<ErrorResponse>)> {
	if let Err(e) = request.calculation.validate() {
		return Err(validation_error(format!("Invalid calculation input: {}", e)));
	}
	if let Err(e) = request.contact.validate() {
		return Err(validation_error(format!("Invalid contact details: {}", e)));
	}

	let result = roical_service::compute(&request.calculation);

	info!(
		company = %request.contact.company,
		"Accepted ROI submission, scheduling lead notification"
	);
	state
		.notifier
		.notify_detached(request.contact, request.calculation, result);

	Ok(Json(SubmissionResponse {
		success: true,
		message: "Your results are on their way! We will be in touch shortly.".to_string(),
	}))
}
