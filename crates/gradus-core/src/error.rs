//! Error types and exit codes for gradus
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph input, bad node reference)

use thiserror::Error;

/// Exit codes reported by the gradus CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph input, bad node reference (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during gradus operations
#[derive(Error, Debug)]
pub enum GradusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, dijkstra, astar, bellman-ford, kruskal, or prim)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("matrix is not square: row {row} has {len} columns, expected {rows}")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },

    #[error("label count mismatch: {labels} labels for {nodes} nodes")]
    LabelCountMismatch { labels: usize, nodes: usize },

    #[error("graph input must contain a \"matrix\" or \"edges\" key")]
    MissingRequiredKey,

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("unknown node label: {0}")]
    UnknownLabel(String),

    #[error("node index {index} out of range for graph with {n} nodes")]
    IndexOutOfRange { index: usize, n: usize },

    #[error("non-finite weight on edge {from}-{to}")]
    NonFiniteWeight { from: usize, to: usize },

    #[error("unknown sample graph: {0}")]
    SampleNotFound(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GradusError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GradusError::UnknownFormat(_)
            | GradusError::UnknownAlgorithm(_)
            | GradusError::UsageError(_) => ExitCode::Usage,

            // Data errors
            GradusError::NonSquareMatrix { .. }
            | GradusError::LabelCountMismatch { .. }
            | GradusError::MissingRequiredKey
            | GradusError::EmptyGraph
            | GradusError::UnknownLabel(_)
            | GradusError::IndexOutOfRange { .. }
            | GradusError::NonFiniteWeight { .. }
            | GradusError::SampleNotFound(_) => ExitCode::Data,

            // Generic failures
            GradusError::Io(_) | GradusError::Json(_) | GradusError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GradusError::UnknownFormat(_) => "unknown_format",
            GradusError::UnknownAlgorithm(_) => "unknown_algorithm",
            GradusError::UsageError(_) => "usage_error",
            GradusError::NonSquareMatrix { .. } => "non_square_matrix",
            GradusError::LabelCountMismatch { .. } => "label_count_mismatch",
            GradusError::MissingRequiredKey => "missing_required_key",
            GradusError::EmptyGraph => "empty_graph",
            GradusError::UnknownLabel(_) => "unknown_label",
            GradusError::IndexOutOfRange { .. } => "index_out_of_range",
            GradusError::NonFiniteWeight { .. } => "non_finite_weight",
            GradusError::SampleNotFound(_) => "sample_not_found",
            GradusError::Io(_) => "io_error",
            GradusError::Json(_) => "json_error",
            GradusError::Other(_) => "other",
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

/// Result type alias for gradus operations
pub type Result<T> = std::result::Result<T, GradusError>;
