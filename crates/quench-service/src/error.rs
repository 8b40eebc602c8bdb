//! Error types for the transpiler service client.

use quench_target::EngineError;
use thiserror::Error;

/// Errors from the transpiler service client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication or authorization failure.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Unknown task id.
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// Other API-level error.
    #[error("service API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The transpilation task reached a failure state.
    #[error("transpilation task failed: {0}")]
    TaskFailed(String),

    /// The task did not reach a terminal state before the deadline.
    #[error("timed out after {waited_secs}s waiting for task {task_id}")]
    Timeout {
        /// Task id being polled.
        task_id: String,
        /// Seconds waited.
        waited_secs: u64,
    },

    /// The service returned a program that does not parse.
    #[error("service returned invalid QASM: {0}")]
    InvalidProgram(#[from] quench_qasm2::ParseError),

    /// The task succeeded but carried no result program.
    #[error("task {0} succeeded without a result program")]
    MissingResult(String),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ServiceError> for EngineError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::TaskFailed(reason) => EngineError::TaskFailed(reason),
            ServiceError::Timeout { waited_secs, .. } => EngineError::Timeout { waited_secs },
            ServiceError::InvalidProgram(parse) => EngineError::InvalidProgram(parse.to_string()),
            ServiceError::MissingResult(task) => {
                EngineError::InvalidProgram(format!("empty result for task {task}"))
            }
            other => EngineError::Request(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_mapping() {
        let err: EngineError = ServiceError::TaskFailed("no layout found".into()).into();
        assert!(matches!(err, EngineError::TaskFailed(_)));

        let err: EngineError = ServiceError::AuthFailed("bad token".into()).into();
        assert!(matches!(err, EngineError::Request(_)));

        let err: EngineError = ServiceError::Timeout {
            task_id: "t1".into(),
            waited_secs: 600,
        }
        .into();
        assert!(matches!(err, EngineError::Timeout { waited_secs: 600 }));
    }
}
