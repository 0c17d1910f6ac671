use reqwest::StatusCode;
use thiserror::Error;

/// Failures on the weather path. These propagate unchanged to the immediate
/// caller; mapping them to user-facing output is the transport's job.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request never produced a response (DNS, connect, body read).
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("weather provider returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// Geocoding produced zero candidates for the query.
    #[error("no location found for '{0}'")]
    NotFound(String),

    /// The provider payload is missing an expected shape.
    #[error("malformed provider payload: {0}")]
    MalformedData(String),
}

/// Keep provider error bodies readable in logs and messages.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Walk back to a char boundary; bodies are not guaranteed to be ASCII
    // and slicing inside a multi-byte character would panic.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
