//! ROI projection computation
//!
//! Pure arithmetic on an already-validated input. Intermediate values stay
//! unrounded; every output field is rounded to two decimal places when the
//! result is constructed.

use roical_types::{CalculationInput, CalculationResult};

/// Share of monthly inquiries assumed to be potential sales leads
const LEAD_SHARE_OF_INQUIRIES: f64 = 0.3;

/// Compute the ROI projection for the given input
///
/// Deterministic and side-effect free. A zero total investment yields a zero
/// ROI rather than a division error. The additional-revenue estimate is
/// produced exactly when the input carries the complete revenue trio; a
/// computed zero is still emitted, since absence is reserved for
/// "not applicable".
pub fn compute(input: &CalculationInput) -> CalculationResult {
	let automatable_inquiries =
		input.monthly_inquiries as f64 * (input.automatable_percent / 100.0);
	let monthly_time_saved_hours =
		automatable_inquiries * input.manual_response_minutes / 60.0;
	let annual_savings_from_automation = monthly_time_saved_hours * 12.0 * input.hourly_cost;

	let automatable_crm_hours = input.monthly_crm_hours * (input.crm_automatable_percent / 100.0);
	let annual_crm_time_saved_hours =
		automatable_crm_hours * 12.0 * input.employee_count as f64;
	let annual_savings_from_crm = annual_crm_time_saved_hours * input.hourly_cost;

	let total_annual_savings = annual_savings_from_automation + annual_savings_from_crm;
	let total_investment = input.implementation_cost + input.annual_license_cost;

	let roi_percent = if total_investment > 0.0 {
		(total_annual_savings - total_investment) / total_investment * 100.0
	} else {
		0.0
	};

	let estimated_additional_revenue =
		input
			.revenue_inputs()
			.map(|(avg_ticket_value, current_rate, expected_rate)| {
				let conversion_improvement = expected_rate - current_rate;
				let estimated_monthly_leads =
					input.monthly_inquiries as f64 * LEAD_SHARE_OF_INQUIRIES;
				estimated_monthly_leads * 12.0 * (conversion_improvement / 100.0) * avg_ticket_value
			});

	CalculationResult {
		monthly_time_saved_hours: round2(monthly_time_saved_hours),
		annual_savings_from_automation: round2(annual_savings_from_automation),
		annual_crm_time_saved_hours: round2(annual_crm_time_saved_hours),
		annual_savings_from_crm: round2(annual_savings_from_crm),
		total_annual_savings: round2(total_annual_savings),
		total_investment: round2(total_investment),
		roi_percent: round2(roi_percent),
		estimated_additional_revenue: estimated_additional_revenue.map(round2),
	}
}

/// Round half away from zero to two decimal places
fn round2(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reference_input() -> CalculationInput {
		CalculationInput {
			monthly_inquiries: 500,
			automatable_percent: 70.0,
			manual_response_minutes: 4.0,
			monthly_crm_hours: 40.0,
			crm_automatable_percent: 40.0,
			employee_count: 3,
			hourly_cost: 2500.0,
			annual_license_cost: 150_000.0,
			implementation_cost: 1_000_000.0,
			avg_ticket_value: None,
			current_conversion_rate: None,
			expected_conversion_rate: None,
		}
	}

	#[test]
	fn test_reference_projection() {
		let result = compute(&reference_input());
		assert_eq!(result.monthly_time_saved_hours, 23.33);
		assert_eq!(result.annual_savings_from_automation, 700_000.0);
		assert_eq!(result.annual_crm_time_saved_hours, 576.0);
		assert_eq!(result.annual_savings_from_crm, 1_440_000.0);
		assert_eq!(result.total_annual_savings, 2_140_000.0);
		assert_eq!(result.total_investment, 1_150_000.0);
		assert_eq!(result.roi_percent, 86.09);
		assert!(result.estimated_additional_revenue.is_none());
	}

	#[test]
	fn test_deterministic() {
		let input = reference_input();
		let first = compute(&input);
		for _ in 0..10 {
			assert_eq!(compute(&input), first);
		}
	}

	#[test]
	fn test_zero_investment_yields_zero_roi() {
		let mut input = reference_input();
		input.annual_license_cost = 0.0;
		input.implementation_cost = 0.0;
		let result = compute(&input);
		assert_eq!(result.total_investment, 0.0);
		assert_eq!(result.roi_percent, 0.0);
		assert!(result.roi_percent.is_finite());
	}

	#[test]
	fn test_revenue_trio_all_or_nothing() {
		let mut input = reference_input();
		input.avg_ticket_value = Some(50_000.0);
		assert!(compute(&input).estimated_additional_revenue.is_none());

		input.current_conversion_rate = Some(2.0);
		assert!(compute(&input).estimated_additional_revenue.is_none());

		input.expected_conversion_rate = Some(4.0);
		// 150 leads/month * 12 * 2% improvement * 50_000
		assert_eq!(
			compute(&input).estimated_additional_revenue,
			Some(1_800_000.0)
		);
	}

	#[test]
	fn test_zero_revenue_is_emitted_not_omitted() {
		let mut input = reference_input();
		input.avg_ticket_value = Some(50_000.0);
		input.current_conversion_rate = Some(3.0);
		input.expected_conversion_rate = Some(3.0);
		assert_eq!(compute(&input).estimated_additional_revenue, Some(0.0));
	}

	#[test]
	fn test_all_outputs_have_at_most_two_decimals() {
		let mut input = reference_input();
		input.monthly_inquiries = 337;
		input.automatable_percent = 61.7;
		input.manual_response_minutes = 7.3;
		input.monthly_crm_hours = 33.1;
		input.crm_automatable_percent = 17.9;
		input.hourly_cost = 1234.56;
		input.avg_ticket_value = Some(987.65);
		input.current_conversion_rate = Some(1.3);
		input.expected_conversion_rate = Some(2.9);

		let result = compute(&input);
		let outputs = [
			result.monthly_time_saved_hours,
			result.annual_savings_from_automation,
			result.annual_crm_time_saved_hours,
			result.annual_savings_from_crm,
			result.total_annual_savings,
			result.total_investment,
			result.roi_percent,
			result.estimated_additional_revenue.unwrap(),
		];
		for value in outputs {
			let scaled = value * 100.0;
			assert!(
				(scaled - scaled.round()).abs() < 1e-6,
				"{} has more than two decimals",
				value
			);
		}
	}

	#[test]
	fn test_zero_activity_input() {
		let input = CalculationInput {
			monthly_inquiries: 0,
			automatable_percent: 0.0,
			manual_response_minutes: 0.0,
			monthly_crm_hours: 0.0,
			crm_automatable_percent: 0.0,
			employee_count: 0,
			hourly_cost: 0.0,
			annual_license_cost: 0.0,
			implementation_cost: 0.0,
			avg_ticket_value: None,
			current_conversion_rate: None,
			expected_conversion_rate: None,
		};
		let result = compute(&input);
		assert_eq!(result.total_annual_savings, 0.0);
		assert_eq!(result.roi_percent, 0.0);
	}
}
