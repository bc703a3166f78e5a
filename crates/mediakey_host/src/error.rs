//! Host Runtime Error Types

use thiserror::Error;

/// Errors from host-runtime lookups and hook installation
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Class not found: {0}")]
    ClassNotFound(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Type mismatch reading {member}: expected {expected}")]
    TypeMismatch {
        member: String,
        expected: &'static str,
    },

    #[error("Call argument {0} missing")]
    ArgumentMissing(usize),

    #[error("Failed to install hook: {0}")]
    HookFailed(String),
}

/// Result type alias for host-runtime operations
pub type HostResult<T> = Result<T, HostError>;
