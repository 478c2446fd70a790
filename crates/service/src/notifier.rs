//! Lead notification: document composition and best-effort delivery

use std::sync::Arc;

use tracing::{error, info};

use roical_mailer::MailTransport;
use roical_types::{
	CalculationInput, CalculationResult, ContactInfo, Document, NotificationError, OutgoingEmail,
	Row, Section,
};

/// Fixed subject prefix; the submitter's company name is appended
pub const SUBJECT_PREFIX: &str = "New ROI calculator lead";

/// Composes lead notification emails and hands them to the mail transport
///
/// Delivery is best-effort: `notify_detached` runs in a background task and
/// failures are logged, never surfaced to the submission caller.
pub struct NotificationService {
	transport: Arc<dyn MailTransport>,
	sender: String,
	recipient: String,
}

impl NotificationService {
	pub fn new(
		transport: Arc<dyn MailTransport>,
		sender: impl Into<String>,
		recipient: impl Into<String>,
	) -> Self {
		Self {
			transport,
			sender: sender.into(),
			recipient: recipient.into(),
		}
	}

	/// Render and deliver a document, making exactly one delivery attempt
	pub async fn send(&self, subject: &str, document: &Document) -> Result<(), NotificationError> {
		let email = OutgoingEmail {
			from: self.sender.clone(),
			to: self.recipient.clone(),
			subject: subject.to_string(),
			html_body: document.render_html(),
		};

		match self.transport.send(&email).await {
			Ok(()) => {
				info!(recipient = %self.recipient, "Lead notification email sent");
				Ok(())
			},
			Err(err) => {
				error!(recipient = %self.recipient, error = %err, "Failed to send lead notification email");
				Err(err)
			},
		}
	}

	/// Compose and deliver the notification for one submission
	pub async fn notify(
		&self,
		contact: &ContactInfo,
		input: &CalculationInput,
		result: &CalculationResult,
	) -> Result<(), NotificationError> {
		let document = compose_lead_document(contact, input, result);
		let subject = lead_subject(&contact.company);
		self.send(&subject, &document).await
	}

	/// Fire-and-forget notification
	///
	/// Spawns the delivery onto the runtime and returns immediately; the
	/// caller's response path never waits on the transport.
	pub fn notify_detached(
		self: &Arc<Self>,
		contact: ContactInfo,
		input: CalculationInput,
		result: CalculationResult,
	) {
		let service = Arc::clone(self);
		tokio::spawn(async move {
			// Outcome is logged inside send(); nothing to propagate.
			let _ = service.notify(&contact, &input, &result).await;
		});
	}
}

/// Subject line for a lead notification, with header-unsafe characters removed
pub fn lead_subject(company: &str) -> String {
	let company: String = company.chars().filter(|c| !c.is_control()).collect();
	format!("{} - {}", SUBJECT_PREFIX, company)
}

/// Build the notification document for one submission
///
/// Optional data never renders as a placeholder: the phone row, the revenue
/// input rows, and the revenue result row are only added when present.
pub fn compose_lead_document(
	contact: &ContactInfo,
	input: &CalculationInput,
	result: &CalculationResult,
) -> Document {
	let mut document = Document::new(SUBJECT_PREFIX);

	let mut contact_section = Section::new("Contact details");
	contact_section.push(Row::new("Full name", &contact.full_name));
	contact_section.push(Row::new("Company", &contact.company));
	contact_section.push(Row::new("Email", &contact.email));
	if let Some(phone) = &contact.phone {
		contact_section.push(Row::new("Phone", phone));
	}
	document.push_section(contact_section);

	let mut inputs = Section::new("Input parameters");
	inputs.push(Row::new(
		"Customer inquiries per month",
		format_count(input.monthly_inquiries),
	));
	inputs.push(Row::new(
		"Inquiries automatable with a chatbot",
		format_percent(input.automatable_percent),
	));
	inputs.push(Row::new(
		"Average manual response time (min)",
		format_number(input.manual_response_minutes),
	));
	inputs.push(Row::new(
		"Monthly hours on CRM tasks",
		format_number(input.monthly_crm_hours),
	));
	inputs.push(Row::new(
		"CRM tasks automatable",
		format_percent(input.crm_automatable_percent),
	));
	inputs.push(Row::new(
		"Employees affected",
		format_count(input.employee_count),
	));
	inputs.push(Row::new(
		"Average hourly cost",
		format_amount(input.hourly_cost),
	));
	inputs.push(Row::new(
		"Annual license cost",
		format_amount(input.annual_license_cost),
	));
	inputs.push(Row::new(
		"Implementation cost",
		format_amount(input.implementation_cost),
	));
	if let Some((avg_ticket_value, current_rate, expected_rate)) = input.revenue_inputs() {
		inputs.push(Row::new(
			"Average sale ticket value",
			format_amount(avg_ticket_value),
		));
		inputs.push(Row::new(
			"Current conversion rate",
			format_percent(current_rate),
		));
		inputs.push(Row::new(
			"Expected conversion rate",
			format_percent(expected_rate),
		));
	}
	document.push_section(inputs);

	let mut results = Section::new("Computed results");
	results.push(Row::new(
		"Monthly time saved by the chatbot (hours)",
		format_number(result.monthly_time_saved_hours),
	));
	results.push(Row::new(
		"Annual savings from inquiry automation",
		format_amount(result.annual_savings_from_automation),
	));
	results.push(Row::new(
		"Annual CRM time saved (hours)",
		format_number(result.annual_crm_time_saved_hours),
	));
	results.push(Row::new(
		"Annual savings from CRM automation",
		format_amount(result.annual_savings_from_crm),
	));
	results.push(Row::highlighted(
		"Total annual savings",
		format_amount(result.total_annual_savings),
	));
	results.push(Row::highlighted(
		"Total investment",
		format_amount(result.total_investment),
	));
	results.push(Row::highlighted(
		"Estimated ROI",
		format!("{:.2}%", result.roi_percent),
	));
	if let Some(revenue) = result.estimated_additional_revenue {
		results.push(Row::highlighted(
			"Estimated additional revenue",
			format_amount(revenue),
		));
	}
	document.push_section(results);

	document
		.footer_lines
		.push("This email was sent automatically by the ROI calculator.".to_string());
	document.footer_lines.push(format!(
		"Date: {}",
		chrono::Utc::now().format("%d/%m/%Y %H:%M UTC")
	));

	document
}

/// "$1,234,567.89"
fn format_amount(value: f64) -> String {
	let formatted = format!("{:.2}", value.abs());
	let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
	let sign = if value < 0.0 { "-" } else { "" };
	format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

fn format_count(value: u32) -> String {
	group_thousands(&value.to_string())
}

fn format_percent(value: f64) -> String {
	format!("{}%", format_number(value))
}

/// Plain number without trailing zeros: 70 -> "70", 23.33 -> "23.33"
fn format_number(value: f64) -> String {
	if value.fract() == 0.0 && value.abs() < 1e15 {
		format!("{}", value as i64)
	} else {
		format!("{}", value)
	}
}

fn group_thousands(digits: &str) -> String {
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	let offset = digits.len() % 3;
	for (i, c) in digits.chars().enumerate() {
		if i != 0 && (i + 3 - offset) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(c);
	}
	grouped
}
