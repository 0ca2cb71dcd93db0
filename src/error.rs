//! Error types for admin-dash
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// The HTTP request to the table store could not complete
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// The table store rejected the request
    #[snafu(display("Store error on {table}: {}", message.as_deref().unwrap_or("no message")))]
    Store {
        table: String,
        status: Option<u16>,
        message: Option<String>,
    },

    /// Backend configuration is missing or unusable
    #[snafu(display("Configuration error: {message}"))]
    Config { message: String },
}

impl Error {
    /// Message handed to a container when an operation fails.
    ///
    /// `None` means the store gave nothing usable and the container
    /// falls back to its generic "Failed to ..." text.
    pub fn store_message(&self) -> Option<String> {
        let message = match self {
            Error::Store { message, .. } => message.clone(),
            Error::Http { source } => Some(source.to_string()),
            other => Some(other.to_string()),
        };
        message.filter(|m| !m.trim().is_empty())
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_message_passes_remote_text_through() {
        let err = Error::Store {
            table: "tickets".to_string(),
            status: Some(409),
            message: Some("duplicate key value violates unique constraint".to_string()),
        };
        assert_eq!(
            err.store_message().as_deref(),
            Some("duplicate key value violates unique constraint")
        );
    }

    #[test]
    fn store_message_empty_means_fallback() {
        let err = Error::Store {
            table: "cards".to_string(),
            status: None,
            message: Some("   ".to_string()),
        };
        assert_eq!(err.store_message(), None);

        let err = Error::Store {
            table: "cards".to_string(),
            status: None,
            message: None,
        };
        assert_eq!(err.store_message(), None);
    }

    #[test]
    fn store_message_for_local_errors_uses_display() {
        let err = Error::Invalid {
            message: "bad row".to_string(),
        };
        assert_eq!(err.store_message().as_deref(), Some("Invalid: bad row"));
    }
}
