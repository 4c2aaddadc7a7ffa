//! Error types and exit codes for airroute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown airport, malformed CSV row, etc.)

mod macros;

use thiserror::Error;

/// Exit codes returned by the airroute binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown airport, invalid record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during airroute operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: prim or kruskal)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown airport: {code}")]
    UnknownAirport { code: String },

    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for an airport code missing from the graph
    pub fn unknown_airport(code: impl Into<String>) -> Self {
        RouteError::UnknownAirport { code: code.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed input row
    pub fn invalid_record(line: u64, reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidRecord {
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UnknownAlgorithm(_)
            | RouteError::UsageError(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::UnknownAirport { .. } | RouteError::InvalidRecord { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Csv(_)
            | RouteError::Toml(_)
            | RouteError::Json(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UnknownAlgorithm(_) => "unknown_algorithm",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::UnknownAirport { .. } => "unknown_airport",
            RouteError::InvalidRecord { .. } => "invalid_record",
            RouteError::Io(_) => "io_error",
            RouteError::Csv(_) => "csv_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Json(_) => "json_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for airroute operations
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_airport_is_data_error() {
        let err = RouteError::unknown_airport("XYZ");
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "unknown airport: XYZ");
    }

    #[test]
    fn test_usage_errors_exit_code() {
        assert_eq!(
            RouteError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RouteError::UnknownAlgorithm("boruvka".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RouteError::invalid_value("stops", -1).exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = RouteError::invalid_record(4, "missing cost").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_record");
        assert_eq!(
            json["error"]["message"],
            "invalid record at line 4: missing cost"
        );
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Failure.into();
        assert_eq!(code, 1);
    }
}
