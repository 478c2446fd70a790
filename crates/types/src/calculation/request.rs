//! Calculation request model and validation

use serde::{Deserialize, Serialize};

use super::{CalculationValidationError, CalculationValidationResult};

/// API request body for the /calculate endpoint
///
/// All monetary figures are in the submitter's local currency; percentages are
/// expressed as 0-100 values, not fractions.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalculationInput {
	/// Customer inquiries received per month
	pub monthly_inquiries: u32,
	/// Share of inquiries that could be automated (0-100)
	pub automatable_percent: f64,
	/// Average manual handling time per inquiry, in minutes
	pub manual_response_minutes: f64,
	/// Hours per month spent on CRM tasks
	pub monthly_crm_hours: f64,
	/// Share of CRM time that could be automated (0-100)
	pub crm_automatable_percent: f64,
	/// Number of employees affected by the CRM workload
	pub employee_count: u32,
	/// Cost per employee-hour
	pub hourly_cost: f64,
	/// Recurring platform cost per year
	pub annual_license_cost: f64,
	/// One-time setup cost
	pub implementation_cost: f64,
	/// Average sale ticket value, for the revenue-uplift estimate
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avg_ticket_value: Option<f64>,
	/// Current lead conversion rate (0-100)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_conversion_rate: Option<f64>,
	/// Expected lead conversion rate after automation (0-100)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expected_conversion_rate: Option<f64>,
}

impl CalculationInput {
	/// Validate the calculation input
	///
	/// Applied validations:
	/// - all floating-point fields must be finite (no NaN/infinity)
	/// - time and cost figures must be non-negative
	/// - percentage fields must fall within 0-100
	///
	/// A partially supplied revenue trio (ticket value / conversion rates) is
	/// NOT an error; it only suppresses the revenue-uplift output.
	pub fn validate(&self) -> CalculationValidationResult<()> {
		check_non_negative("manualResponseMinutes", self.manual_response_minutes)?;
		check_non_negative("monthlyCrmHours", self.monthly_crm_hours)?;
		check_non_negative("hourlyCost", self.hourly_cost)?;
		check_non_negative("annualLicenseCost", self.annual_license_cost)?;
		check_non_negative("implementationCost", self.implementation_cost)?;
		check_percent("automatablePercent", self.automatable_percent)?;
		check_percent("crmAutomatablePercent", self.crm_automatable_percent)?;

		if let Some(value) = self.avg_ticket_value {
			check_non_negative("avgTicketValue", value)?;
		}
		if let Some(rate) = self.current_conversion_rate {
			check_percent("currentConversionRate", rate)?;
		}
		if let Some(rate) = self.expected_conversion_rate {
			check_percent("expectedConversionRate", rate)?;
		}

		Ok(())
	}

	/// The optional revenue fields as a complete trio, if all are present
	pub fn revenue_inputs(&self) -> Option<(f64, f64, f64)> {
		match (
			self.avg_ticket_value,
			self.current_conversion_rate,
			self.expected_conversion_rate,
		) {
			(Some(ticket), Some(current), Some(expected)) => Some((ticket, current, expected)),
			_ => None,
		}
	}
}

fn check_non_negative(field: &'static str, value: f64) -> CalculationValidationResult<()> {
	if !value.is_finite() {
		return Err(CalculationValidationError::NotFinite { field });
	}
	if value < 0.0 {
		return Err(CalculationValidationError::OutOfRange {
			field,
			reason: format!("{} must not be negative", value),
		});
	}
	Ok(())
}

fn check_percent(field: &'static str, value: f64) -> CalculationValidationResult<()> {
	if !value.is_finite() {
		return Err(CalculationValidationError::NotFinite { field });
	}
	if !(0.0..=100.0).contains(&value) {
		return Err(CalculationValidationError::OutOfRange {
			field,
			reason: format!("{} is not a percentage between 0 and 100", value),
		});
	}
	Ok(())
}
