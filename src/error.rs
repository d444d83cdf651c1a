//! Error type for the fallible edges of the game: files and the network.
//!
//! The simulation itself never fails. Callers at the presentation boundary
//! log these and fall back to defaults instead of surfacing them.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Reading or writing a local file failed
    Io(std::io::Error),
    /// A stored file did not parse
    Json(serde_json::Error),
    /// No credential configured for the commentary service
    MissingApiKey {
        /// Environment variable that was checked
        var: String,
    },
    /// The commentary provider throttled us (HTTP 429)
    RateLimited,
    /// Transport or HTTP failure talking to the commentary provider
    Http(String),
    /// Provider answered without any text
    EmptyResponse,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Json(e) => write!(f, "malformed json: {}", e),
            Error::MissingApiKey { var } => {
                write!(f, "no commentary credential in ${}", var)
            }
            Error::RateLimited => write!(f, "commentary quota exceeded (429)"),
            Error::Http(msg) => write!(f, "commentary request failed: {}", msg),
            Error::EmptyResponse => write!(f, "commentary response had no text"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(429, _) => Error::RateLimited,
            ureq::Error::Status(code, response) => {
                Error::Http(format!("status {} ({})", code, response.status_text()))
            }
            ureq::Error::Transport(t) => Error::Http(t.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
