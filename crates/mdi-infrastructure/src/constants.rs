//! Infrastructure layer constants

/// Default logging level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "MDI_LOG";
