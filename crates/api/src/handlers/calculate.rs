use axum::{http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{validation_error, ErrorResponse};
use roical_types::{CalculationInput, CalculationResult};

/// POST /calculate - Compute an ROI projection
///
/// Validation failures map to 400 with field-level detail; the computation
/// itself cannot fail.
pub async fn post_calculate(
	Json(input): Json<CalculationInput>,
) -> Result<Json<CalculationResult>, (StatusCode, Json<ErrorResponse>)> {
	if let Err(e) = input.validate() {
		return Err(validation_error(format!("Invalid calculation input: {}", e)));
	}

	info!(
		monthly_inquiries = input.monthly_inquiries,
		employee_count = input.employee_count,
		"Computing ROI projection"
	);

	Ok(Json(roical_service::compute(&input)))
}
