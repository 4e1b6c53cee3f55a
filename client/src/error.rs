use job_market::ConversionError;
use thiserror::Error;

/// Failures surfaced by the write path. Read-path failures never reach the
/// caller, see [`QueryError`] and [`MalformedObject`].
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("wallet not connected")]
    NotConnected,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Transport or provider failure while querying owned objects. Swallowed by
/// `fetch_jobs`, which logs it and resolves to an empty result.
#[derive(Debug, Error)]
#[error("object query failed: {0}")]
pub struct QueryError(pub String);

/// Failure reported by the sign-and-execute capability.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The signer declined to sign, e.g. the user rejected the prompt.
    #[error("signing rejected: {0}")]
    Rejected(String),

    #[error("transaction execution failed: {0}")]
    Execution(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// A single queried object that could not be mapped into a `Job`. The object
/// is dropped and counted; the fetch carries on.
#[derive(Debug, Error)]
pub enum MalformedObject {
    #[error("object response carries no data")]
    MissingData,

    #[error("object {0} has no content")]
    MissingContent(String),

    #[error("unexpected field layout: {0}")]
    Fields(#[from] serde_json::Error),

    #[error("field `{0}` is not a u64")]
    NotNumeric(&'static str),
}
