//! Structured email document model
//!
//! The notifier composes a `Document` out of label/value sections and renders
//! it to HTML at send time. Rows for optional data (phone, revenue estimate)
//! are simply not added, so downstream readers can tell "not applicable"
//! apart from "zero".

/// A single label/value row in a document section
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
	pub label: String,
	pub value: String,
	/// Highlighted rows render with emphasis (totals, headline figures)
	pub highlight: bool,
}

impl Row {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			highlight: false,
		}
	}

	pub fn highlighted(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			highlight: true,
		}
	}
}

/// A titled table of rows
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
	pub title: String,
	pub rows: Vec<Row>,
}

impl Section {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			rows: Vec::new(),
		}
	}

	pub fn push(&mut self, row: Row) {
		self.rows.push(row);
	}

	/// Find a row by its label, mainly for assertions in tests
	pub fn row(&self, label: &str) -> Option<&Row> {
		self.rows.iter().find(|r| r.label == label)
	}
}

/// A renderable email body
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	pub title: String,
	pub sections: Vec<Section>,
	pub footer_lines: Vec<String>,
}

impl Document {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			sections: Vec::new(),
			footer_lines: Vec::new(),
		}
	}

	pub fn push_section(&mut self, section: Section) {
		self.sections.push(section);
	}

	pub fn section(&self, title: &str) -> Option<&Section> {
		self.sections.iter().find(|s| s.title == title)
	}

	/// Render the document as a self-contained HTML page
	///
	/// Every label and value is HTML-escaped; user-supplied strings must not
	/// be able to inject markup.
	pub fn render_html(&self) -> String {
		let mut html = String::with_capacity(2048);
		html.push_str("<html><head><style>");
		html.push_str(
			"body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; } \
			 .header { background-color: #007bff; color: white; padding: 20px; text-align: center; } \
			 .section { margin: 20px 0; padding: 15px; border: 1px solid #ddd; border-radius: 8px; } \
			 .section h3 { color: #007bff; margin-top: 0; } \
			 table { width: 100%; border-collapse: collapse; margin: 10px 0; } \
			 th, td { padding: 8px 12px; border: 1px solid #ddd; text-align: left; } \
			 th { background-color: #f8f9fa; font-weight: bold; } \
			 .highlight { background-color: #e8f4fd; font-weight: bold; } \
			 .footer { margin-top: 30px; padding: 20px; background-color: #f8f9fa; border-radius: 8px; }",
		);
		html.push_str("</style></head><body>");

		html.push_str("<div class=\"header\"><h2>");
		html.push_str(&escape_html(&self.title));
		html.push_str("</h2></div>");

		for section in &self.sections {
			html.push_str("<div class=\"section\"><h3>");
			html.push_str(&escape_html(&section.title));
			html.push_str("</h3><table>");
			for row in &section.rows {
				if row.highlight {
					html.push_str("<tr class=\"highlight\">");
				} else {
					html.push_str("<tr>");
				}
				html.push_str("<th>");
				html.push_str(&escape_html(&row.label));
				html.push_str("</th><td>");
				html.push_str(&escape_html(&row.value));
				html.push_str("</td></tr>");
			}
			html.push_str("</table></div>");
		}

		if !self.footer_lines.is_empty() {
			html.push_str("<div class=\"footer\">");
			for line in &self.footer_lines {
				html.push_str("<p>");
				html.push_str(&escape_html(line));
				html.push_str("</p>");
			}
			html.push_str("</div>");
		}

		html.push_str("</body></html>");
		html
	}
}

/// Escape the characters HTML assigns meaning to
pub fn escape_html(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_html() {
		assert_eq!(
			escape_html("<b>\"Tom & Jerry's\"</b>"),
			"&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
		);
		assert_eq!(escape_html("plain text"), "plain text");
	}

	#[test]
	fn test_render_contains_rows_in_order() {
		let mut doc = Document::new("Test report");
		let mut section = Section::new("Details");
		section.push(Row::new("First", "1"));
		section.push(Row::highlighted("Total", "2"));
		doc.push_section(section);

		let html = doc.render_html();
		let first = html.find("<th>First</th>").unwrap();
		let total = html.find("<th>Total</th>").unwrap();
		assert!(first < total);
		assert!(html.contains("<tr class=\"highlight\"><th>Total</th>"));
	}

	#[test]
	fn test_render_escapes_values() {
		let mut doc = Document::new("Report");
		let mut section = Section::new("Details");
		section.push(Row::new("Company", "<script>alert(1)</script>"));
		doc.push_section(section);

		let html = doc.render_html();
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
	}

	#[test]
	fn test_footer_rendered_when_present() {
		let mut doc = Document::new("Report");
		doc.footer_lines.push("Sent automatically.".to_string());
		let html = doc.render_html();
		assert!(html.contains("class=\"footer\""));
		assert!(html.contains("Sent automatically."));

		let empty = Document::new("Report").render_html();
		assert!(!empty.contains("class=\"footer\""));
	}
}
