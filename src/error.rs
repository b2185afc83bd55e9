//! Error types and handling for the barograph application

use thiserror::Error;

/// Main error type for the barograph application
#[derive(Error, Debug)]
pub enum BarographError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport-level errors while talking to the forecast API
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status returned by the forecast API
    #[error("HTTP error: status {status}")]
    HttpStatus { status: u16 },

    /// Malformed response body from the forecast API
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Response decoded but required forecast fields were absent or inconsistent
    #[error("Missing forecast data: {message}")]
    MissingData { message: String },

    /// The extracted forecast window contained no samples
    #[error("Forecast window is empty")]
    EmptyWindow,

    /// Chart rendering errors
    #[error("Chart error: {message}")]
    Chart { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl BarographError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap a transport error from the HTTP client
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new missing-data error
    pub fn missing_data<S: Into<String>>(message: S) -> Self {
        Self::MissingData {
            message: message.into(),
        }
    }

    /// Create a new chart error
    pub fn chart<S: Into<String>>(message: S) -> Self {
        Self::Chart {
            message: message.into(),
        }
    }

    /// Whether this error comes from the fetch path (network, status, body).
    ///
    /// Fetch failures are what the presentation layer folds into its error
    /// panel; configuration and I/O problems are surfaced to the caller
    /// instead.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            BarographError::Network { .. }
                | BarographError::HttpStatus { .. }
                | BarographError::Parse { .. }
                | BarographError::MissingData { .. }
                | BarographError::EmptyWindow
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BarographError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            BarographError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            BarographError::HttpStatus { status } => {
                format!("The weather service rejected the request (status {status}).")
            }
            BarographError::Parse { .. } | BarographError::MissingData { .. } => {
                "The weather service returned unusable data.".to_string()
            }
            BarographError::EmptyWindow => {
                "No forecast samples are available for the requested hours.".to_string()
            }
            BarographError::Chart { .. } => "Chart rendering failed.".to_string(),
            BarographError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
