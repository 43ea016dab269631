// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
    Decode(String),
    Rasterization(String),
}

/// Failures of a remote page query.
///
/// Every variant leaves the grid on its last good page; the user retries by
/// changing the query or pressing refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failed before a response arrived (DNS, TLS, timeout, reset).
    Network(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The body was not a page envelope.
    Parse(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "error-fetch-network",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::Parse(_) => "error-fetch-parse",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            FetchError::Parse(msg) => write!(f, "Malformed page envelope: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n key used when this error is surfaced as a toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Fetch(err) => err.i18n_key(),
            Error::Decode(_) => "notification-logo-decode-error",
            Error::Rasterization(_) => "notification-export-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Rasterization(e) => write!(f, "Rasterization Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn fetch_error_wraps_into_error() {
        let err: Error = FetchError::Status(503).into();
        assert!(matches!(err, Error::Fetch(FetchError::Status(503))));
        assert!(format!("{}", err).contains("503"));
    }

    #[test]
    fn fetch_error_i18n_keys() {
        assert_eq!(
            FetchError::Network("reset".into()).i18n_key(),
            "error-fetch-network"
        );
        assert_eq!(FetchError::Status(404).i18n_key(), "error-fetch-status");
        assert_eq!(
            FetchError::Parse("eof".into()).i18n_key(),
            "error-fetch-parse"
        );
    }

    #[test]
    fn decode_and_rasterization_keys_are_distinct() {
        let decode = Error::Decode("bad header".into());
        let raster = Error::Rasterization("no pixmap".into());
        assert_ne!(decode.i18n_key(), raster.i18n_key());
    }
}
