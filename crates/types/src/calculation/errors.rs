//! Error types for calculation input validation

use thiserror::Error;

/// Validation errors for calculation inputs
#[derive(Error, Debug)]
pub enum CalculationValidationError {
	#[error("Invalid value for {field}: {reason}")]
	OutOfRange { field: &'static str, reason: String },

	#[error("Value for {field} must be a finite number")]
	NotFinite { field: &'static str },
}

impl CalculationValidationError {
	/// The offending input field, in the wire (camelCase) spelling
	pub fn field(&self) -> &'static str {
		match self {
			Self::OutOfRange { field, .. } => field,
			Self::NotFinite { field } => field,
		}
	}
}

pub type CalculationValidationResult<T> = Result<T, CalculationValidationError>;
