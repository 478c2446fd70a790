//! Submission request/response models for the /submit endpoint

use serde::{Deserialize, Serialize};

use crate::{CalculationInput, ContactInfo};

/// API request body for the /submit endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubmissionRequest {
	pub calculation: CalculationInput,
	pub contact: ContactInfo,
}

/// Acknowledgement returned by the /submit endpoint
///
/// Acknowledges acceptance, not delivery: the notification email is sent in
/// the background after this response is produced.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
	pub success: bool,
	pub message: String,
}
