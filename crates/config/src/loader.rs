//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the optional config file plus environment overrides
///
/// Layering, later sources win:
/// 1. `config/config.{toml,yaml,json}` if present
/// 2. environment variables with the `ROI` prefix and `__` nesting separator,
///    e.g. `ROI_MAIL__USERNAME`, `ROI_SERVER__PORT`
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("ROI").separator("__"))
		.build()?;

	s.try_deserialize()
}
