//! Transport-agnostic outbound email message

/// A fully composed email, ready to hand to a mail transport
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
	pub from: String,
	pub to: String,
	pub subject: String,
	pub html_body: String,
}
