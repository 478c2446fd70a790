//! Calculation input/output models and validation

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{CalculationValidationError, CalculationValidationResult};
pub use request::CalculationInput;
pub use response::CalculationResult;
