use thiserror::Error;

/// Failures that stop a request from producing a response.
///
/// A non-2xx status is not one of these; it is normalized like any other
/// response.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    #[error("URL cannot be empty")]
    EmptyUrl,
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Transport(String),
    #[error("Failed to read response: {0}")]
    ReadBody(String),
}

impl RequestError {
    pub fn transport(err: &reqwest::Error) -> Self {
        let kind = if err.is_connect() {
            "connection failed"
        } else if err.is_timeout() {
            "timed out"
        } else {
            "request failed"
        };
        RequestError::Transport(format!("{kind}: {err}"))
    }
}
