use thiserror::Error;

/// The request could not be completed or its response could not be interpreted.
///
/// Distinct from a compiler rejection, which arrives as
/// [`CompileResult::Failure`](super::CompileResult::Failure).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level failure (connection refused, DNS, TLS, reset)
    #[error("request failed: {0}")]
    Request(String),

    /// Non-2xx status whose body was not a compiler payload
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Well-formed JSON that is not a usable compiler response
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The background task running the request died
    #[error("compile task failed: {0}")]
    Task(String),
}
