//! Generator configuration, as passed through the protoc plugin parameter.

use protoerr::JoinOrder;

/// The construction function used when none is configured.
pub const DEFAULT_ERROR_CONSTRUCTOR: &str = "::protoerr;new_error";

/// Errors in the plugin parameter string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown parameter '{key}'")]
    UnknownParameter { key: String },

    #[error("parameter '{key}' requires a value")]
    MissingValue { key: String },

    #[error("invalid join_order '{value}', expected 'prepend' or 'append'")]
    InvalidJoinOrder { value: String },
}

/// Read-only settings for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// The construction function, as `<path>;<ident>`.
    ///
    /// The named function must have the shape
    /// `fn(status: i32, code: i32, message: &str, cause: protoerr::BoxError) -> protoerr::BoxError`.
    pub error_constructor: String,

    /// Where generated `join` places the receiving value among the joined errors.
    pub join_order: JoinOrder,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            error_constructor: DEFAULT_ERROR_CONSTRUCTOR.to_string(),
            join_order: JoinOrder::default(),
        }
    }
}
impl GeneratorConfig {
    /// Parses a comma separated list of `key=value` pairs.
    ///
    /// Recognized keys are `error_constructor` (also spelled `new_errors_func`) and
    /// `join_order`. Later pairs override earlier ones. The constructor value is only checked when names are resolved.
    pub fn from_parameter(parameter: &str) -> Result<GeneratorConfig, ConfigError> {
        let mut config = GeneratorConfig::default();
        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (pair, ""),
            };
            match key {
                "error_constructor" | "new_errors_func" | "join_order" if value.is_empty() => {
                    return Err(ConfigError::MissingValue { key: key.to_string() });
                }
                "error_constructor" | "new_errors_func" => {
                    config.error_constructor = value.to_string();
                }
                "join_order" => {
                    config.join_order = JoinOrder::from_name(value)
                        .ok_or_else(|| ConfigError::InvalidJoinOrder { value: value.to_string() })?;
                }
                _ => return Err(ConfigError::UnknownParameter { key: key.to_string() }),
            }
        }
        Ok(config)
    }
}
