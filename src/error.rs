use std::path::PathBuf;

use thiserror::Error;

/// Error types for WAHA operations
#[derive(Error, Debug)]
pub enum Error {
    /// The server rejected the API key (HTTP 401)
    #[error("Authentication failed. Please check your API key.")]
    Authentication { status: u16 },

    /// The requested resource does not exist (HTTP 404)
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    /// Too many requests (HTTP 429)
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimit { status: u16 },

    /// The server failed to handle the request (HTTP 5xx)
    #[error("{message} (Status: {status})")]
    Server { status: u16, message: String },

    /// Any other failed request, including transport failures
    #[error("{message}{}", status_suffix(.status))]
    Client {
        status: Option<u16>,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Configuration error (missing or invalid settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A local media file could not be read
    #[error("Failed to read file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (Status: {})", code),
        None => String::new(),
    }
}

impl Error {
    /// Create a new configuration error
    pub fn configuration<S: AsRef<str>>(message: S) -> Self {
        Error::Configuration(message.as_ref().to_string())
    }

    /// Create a catch-all client error without a status code
    pub fn client<S: AsRef<str>>(message: S) -> Self {
        Error::Client {
            status: None,
            message: message.as_ref().to_string(),
            source: None,
        }
    }

    /// Create a catch-all client error for an HTTP status
    pub fn client_status<S: AsRef<str>>(status: u16, message: S) -> Self {
        Error::Client {
            status: Some(status),
            message: message.as_ref().to_string(),
            source: None,
        }
    }

    /// Normalize a transport failure into a client error
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("Request timeout: {}", err)
        } else if err.is_connect() {
            format!("Connection error: {}", err)
        } else {
            format!("Request failed: {}", err)
        };

        Error::Client {
            status: err.status().map(|s| s.as_u16()),
            message,
            source: Some(err),
        }
    }

    /// The HTTP status code behind this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status }
            | Error::RateLimit { status }
            | Error::Server { status, .. } => Some(*status),
            Error::NotFound { .. } => Some(404),
            Error::Client { status, .. } => *status,
            Error::Configuration(_) | Error::File { .. } => None,
        }
    }
}
