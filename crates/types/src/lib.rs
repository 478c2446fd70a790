//! ROI Calculator Types
//!
//! Domain models, validation, and error types shared across the service.

pub mod calculation;
pub mod contact;
pub mod notification;
pub mod secret_string;
pub mod submission;

pub use calculation::{
	CalculationInput, CalculationResult, CalculationValidationError, CalculationValidationResult,
};
pub use contact::{ContactInfo, ContactValidationError, ContactValidationResult};
pub use notification::{Document, NotificationError, OutgoingEmail, Row, Section};
pub use secret_string::SecretString;
pub use submission::{SubmissionRequest, SubmissionResponse};
