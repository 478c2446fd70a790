//! Contact form model and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for contact details
#[derive(Error, Debug)]
pub enum ContactValidationError {
	#[error("Missing required field: {field}")]
	Empty { field: &'static str },

	#[error("Field {field} contains control characters")]
	ControlCharacters { field: &'static str },

	#[error("Invalid email address: {reason}")]
	InvalidEmail { reason: String },
}

pub type ContactValidationResult<T> = Result<T, ContactValidationError>;

/// Contact details submitted alongside a calculation
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactInfo {
	pub full_name: String,
	pub company: String,
	pub email: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}

impl ContactInfo {
	/// Validate the contact details
	///
	/// Applied validations:
	/// - `fullName` and `company` must be non-empty after trimming
	/// - `email` must be structurally valid (single `@`, dotted domain)
	/// - no field may contain ASCII control characters, since contact values
	///   end up in outbound mail headers and bodies
	pub fn validate(&self) -> ContactValidationResult<()> {
		check_non_empty("fullName", &self.full_name)?;
		check_non_empty("company", &self.company)?;
		check_no_control_chars("email", &self.email)?;
		if let Some(phone) = &self.phone {
			check_no_control_chars("phone", phone)?;
		}

		if !is_valid_email(&self.email) {
			return Err(ContactValidationError::InvalidEmail {
				reason: format!("'{}' is not a valid address", self.email),
			});
		}

		Ok(())
	}
}

fn check_non_empty(field: &'static str, value: &str) -> ContactValidationResult<()> {
	if value.trim().is_empty() {
		return Err(ContactValidationError::Empty { field });
	}
	check_no_control_chars(field, value)
}

fn check_no_control_chars(field: &'static str, value: &str) -> ContactValidationResult<()> {
	if value.chars().any(|c| c.is_control()) {
		return Err(ContactValidationError::ControlCharacters { field });
	}
	Ok(())
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is the transport's problem, not ours.
fn is_valid_email(address: &str) -> bool {
	if address.chars().any(|c| c.is_whitespace()) {
		return false;
	}
	let mut parts = address.split('@');
	match (parts.next(), parts.next(), parts.next()) {
		(Some(local), Some(domain), None) => {
			!local.is_empty()
				&& domain.contains('.')
				&& !domain.starts_with('.')
				&& !domain.ends_with('.')
		},
		_ => false,
	}
}
