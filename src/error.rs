use thiserror::Error;

/// Failures surfaced by the management agent and the command routines
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or contradictory input
    #[error("invalid argument: {0}")]
    Argument(String),

    /// A name-to-id lookup found nothing usable
    #[error("resolution failed: {0}")]
    Resolution(String),

    /// The remote call could not complete or returned an unexpected response
    #[error("transport error: {0}")]
    Transport(String),

    /// Credentials were rejected by the service
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The confirmation prompt could not be read
    #[error("failed to read confirmation: {0}")]
    Prompt(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timeout: {err}"))
        } else if err.is_connect() {
            Self::Transport(format!("connection error: {err}"))
        } else if err.is_decode() {
            Self::Transport(format!("failed to parse response: {err}"))
        } else {
            Self::Transport(format!("HTTP error: {err}"))
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
