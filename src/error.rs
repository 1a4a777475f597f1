use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures while fetching odds data from the provider.
///
/// Three kinds exist: transport failures (`Network`, `Status`), payloads
/// that do not match the expected schema (`Malformed`), and responses that
/// carry no data (`Empty`). None of them are fatal to a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no data returned")]
    Empty,
}

impl FetchError {
    /// True for transport-level failures (connection, timeout, HTTP status).
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    /// True when the provider answered but the payload failed schema decoding.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// True when the provider answered with no usable data.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_kinds() {
        assert!(FetchError::Network("reset".into()).is_network());
        assert!(FetchError::Status {
            status: 502,
            url: "http://x".into()
        }
        .is_network());
        assert!(FetchError::Malformed("missing field".into()).is_malformed());
        assert!(FetchError::Empty.is_empty());
        assert!(!FetchError::Empty.is_network());
    }

    #[test]
    fn fetch_error_converts_into_crate_error() {
        let err: Error = FetchError::Empty.into();
        assert!(matches!(err, Error::Fetch(FetchError::Empty)));
        assert_eq!(err.to_string(), "no data returned");
    }
}
