//! Error taxonomy for the completion boundary.

use thiserror::Error;

/// Failures surfaced by completion providers.
///
/// The display text is what the turn loop shows to the user, so each variant
/// carries wording a person can act on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    /// Credential missing or rejected by the service.
    #[error("Invalid API key. Please check your API key and ensure it's valid.")]
    Unauthenticated,
    /// The service throttled the request.
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,
    /// Account quota exhausted.
    #[error("Quota exceeded. Please check your billing and usage limits.")]
    QuotaExceeded,
    /// Network failure or an unexpected status from the service.
    #[error("Completion request failed: {0}")]
    Transport(String),
    /// The service answered without any usable content.
    #[error("The service returned an empty reply.")]
    EmptyResponse,
    /// The response body could not be decoded.
    #[error("Failed to decode completion response: {0}")]
    MalformedResponse(String),
}
