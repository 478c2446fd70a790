//! ROI Calculator Configuration
//!
//! Settings structures, file/environment loading, and startup logging.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{LogFormat, LoggingSettings, MailSettings, ServerSettings, Settings};
pub use startup_logger::{log_service_info, log_startup_complete};
