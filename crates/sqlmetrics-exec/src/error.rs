//! Execution error types.

use thiserror::Error;

/// Errors surfaced by statement execution.
///
/// Executor implementations map driver failures into the first two variants;
/// the timing wrapper adds only [`RegistryUnset`](Error::RegistryUnset) and
/// passes everything else through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Connection could not be obtained or was lost.
    #[error("connection error: {0}")]
    Connection(String),

    /// Statement execution failed.
    #[error("execution failed: {0}")]
    Execution(String),

    /// A timer was required but no metrics registry has been configured.
    #[error("metrics registry is not configured")]
    RegistryUnset,
}
