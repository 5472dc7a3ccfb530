use reqwest::StatusCode;
use thiserror::Error;
use tracing::error;

/// Message shown for every failed submission, whatever went wrong.
pub const GENERIC_SUBMIT_ERROR: &str = "An error occurred while processing the request.";

/// Everything that can go wrong while talking to the account endpoint.
///
/// These details are for the log only. Callers of the API helper receive a
/// [`SubmitError`] instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status}: {title} - {description}")]
    Status {
        status: StatusCode,
        title: String,
        description: String,
    },
    #[error("unreadable response body: {0}")]
    Decode(String),
}

/// The single error surfaced to the form when a submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("An error occurred while processing the request.")]
pub struct SubmitError;

/// Convert the detailed API error into the generic one
///
/// The cause is written to the log and then dropped, so the page never shows
/// server-provided failure reasons.
impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        error!("API Error: {}", err);
        SubmitError
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid server url `{0}`: expected an http(s) url")]
    InvalidServerUrl(String),
    #[error("invalid notification duration `{0}`: expected milliseconds")]
    InvalidDuration(String),
}
