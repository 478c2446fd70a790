//! Calculation result model

use serde::{Deserialize, Serialize};

/// Computed ROI projection returned by the /calculate endpoint
///
/// All monetary and time figures are rounded to two decimal places when the
/// result is constructed. `estimated_additional_revenue` is present only when
/// the request carried the complete revenue trio; absence means the estimate
/// was not applicable, a `0.00` means it was computed as zero.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
	/// Hours saved per month by automating inquiry handling
	pub monthly_time_saved_hours: f64,
	/// Annual savings from automated inquiry handling
	pub annual_savings_from_automation: f64,
	/// Hours saved per year by automating CRM tasks, across all employees
	pub annual_crm_time_saved_hours: f64,
	/// Annual savings from automated CRM tasks
	pub annual_savings_from_crm: f64,
	pub total_annual_savings: f64,
	pub total_investment: f64,
	/// First-year return on investment, as a percentage
	pub roi_percent: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub estimated_additional_revenue: Option<f64>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_revenue_field_omitted_when_absent() {
		let result = CalculationResult {
			monthly_time_saved_hours: 1.0,
			annual_savings_from_automation: 2.0,
			annual_crm_time_saved_hours: 3.0,
			annual_savings_from_crm: 4.0,
			total_annual_savings: 6.0,
			total_investment: 5.0,
			roi_percent: 20.0,
			estimated_additional_revenue: None,
		};
		let json = serde_json::to_value(&result).unwrap();
		assert!(json.get("estimatedAdditionalRevenue").is_none());
		assert!(json.get("roiPercent").is_some());
	}

	#[test]
	fn test_revenue_field_serialized_when_present() {
		let result = CalculationResult {
			monthly_time_saved_hours: 1.0,
			annual_savings_from_automation: 2.0,
			annual_crm_time_saved_hours: 3.0,
			annual_savings_from_crm: 4.0,
			total_annual_savings: 6.0,
			total_investment: 5.0,
			roi_percent: 20.0,
			estimated_additional_revenue: Some(0.0),
		};
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(json["estimatedAdditionalRevenue"], 0.0);
	}
}
