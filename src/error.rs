// Error types for labscan
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// Structured error types using thiserror. Validation errors are recoverable
// (the user is asked again), client errors abort the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a user-supplied hostname is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing left after trimming whitespace
    #[error("host cannot be empty")]
    Empty,

    /// A scheme such as `https://` was supplied
    #[error("host must not include protocol (http/https)")]
    ContainsProtocol,

    /// A path component was supplied
    #[error("host must not contain path")]
    ContainsPath,

    /// Not a syntactically valid DNS hostname
    #[error("invalid hostname format")]
    InvalidFormat,

    /// The name did not resolve to any address
    #[error("host does not resolve via DNS")]
    Unresolvable { host: String },
}

/// Failures talking to the assessment API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or connection failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP client could not be set up locally (e.g. TLS backend init)
    #[error("failed to initialise HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Non-2xx HTTP status
    #[error("http error: {0}")]
    Http(u16),

    /// Response body was not a valid assessment report
    #[error("failed to decode assessment response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configured API base URL could not be parsed
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Configuration loading and argument errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("File system error: {path}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Conflicting or out-of-range options
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "host cannot be empty");
        assert!(ValidationError::ContainsProtocol.to_string().contains("protocol"));
        assert!(ValidationError::ContainsPath.to_string().contains("path"));
        assert_eq!(
            ValidationError::Unresolvable {
                host: "nope.invalid".to_string()
            }
            .to_string(),
            "host does not resolve via DNS"
        );
    }

    #[test]
    fn test_http_error_carries_status() {
        let err = ClientError::Http(503);
        assert_eq!(err.to_string(), "http error: 503");
    }

    #[test]
    fn test_build_error_is_not_a_network_error() {
        use std::error::Error;

        let reqwest_err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let err = ClientError::Build(reqwest_err);

        assert!(err.to_string().starts_with("failed to initialise HTTP client"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_config_error_chain_preserved() {
        use std::error::Error;

        let err = ConfigError::FileSystem {
            path: PathBuf::from("labscan.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };

        assert!(err.to_string().contains("labscan.toml"));
        assert!(err.source().is_some());
    }
}
