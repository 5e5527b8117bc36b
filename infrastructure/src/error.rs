use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{provider} API error ({status}): {body}")]
    Status {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("{0} returned no text")]
    EmptyResponse(&'static str),
}

/// Trims generated text and treats a blank answer as a failure.
pub(crate) fn non_empty(provider: &'static str, text: &str) -> Result<String, GenerationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse(provider));
    }
    Ok(trimmed.to_string())
}
