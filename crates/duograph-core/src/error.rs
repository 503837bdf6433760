//! Error types and exit codes for duograph
//!
//! Graph operations themselves never fail; invalid mutations are ignored and
//! queries on unknown vertices return empty results. Errors only surface at
//! the edges of the system: parsing edge specifications, loading config and
//! producing output.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed edge specs)
//! - 3: Data error (malformed or invalid configuration)

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed or invalid configuration (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the graph core
#[derive(Error, Debug)]
pub enum DuographError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid edge '{spec}': {reason}")]
    InvalidEdge { spec: String, reason: String },

    // Data errors (exit code 3)
    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DuographError {
    /// Create an error for a malformed edge specification
    pub fn invalid_edge(spec: &str, reason: impl std::fmt::Display) -> Self {
        DuographError::InvalidEdge {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DuographError::UnknownFormat(_)
            | DuographError::UsageError(_)
            | DuographError::InvalidEdge { .. } => ExitCode::Usage,

            DuographError::InvalidConfig { .. } | DuographError::Toml(_) => ExitCode::Data,

            DuographError::Io(_) | DuographError::Json(_) | DuographError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            DuographError::UnknownFormat(_) => "unknown_format",
            DuographError::UsageError(_) => "usage_error",
            DuographError::InvalidEdge { .. } => "invalid_edge",
            DuographError::InvalidConfig { .. } => "invalid_config",
            DuographError::Io(_) => "io_error",
            DuographError::Json(_) => "json_error",
            DuographError::Toml(_) => "toml_error",
            DuographError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for duograph operations
pub type Result<T> = std::result::Result<T, DuographError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_map_to_exit_code_2() {
        let err = DuographError::invalid_edge("0:x", "weight is not a number");
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(i32::from(err.exit_code()), 2);

        let err = DuographError::UnknownFormat("yaml".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn test_config_errors_map_to_exit_code_3() {
        let err = DuographError::InvalidConfig {
            path: "/tmp/config.toml".to_string(),
            reason: "default_weight must be at least 1".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_io_error_is_generic_failure() {
        let err = DuographError::from(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = DuographError::invalid_edge("A", "expected two endpoints");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_edge");
        assert_eq!(
            json["error"]["message"],
            "invalid edge 'A': expected two endpoints"
        );
    }
}
