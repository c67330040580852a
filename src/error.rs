// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Engine(EngineError),
}

/// Failures reported while binding a playback engine to a media source.
///
/// None of these are fatal: a session that cannot obtain an engine stays
/// inert, and a rejected quality source leaves the current one playing.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The URL could not be parsed (missing scheme, whitespace, empty).
    MalformedUrl(String),

    /// The URL is well formed but the engine cannot resolve it.
    Unresolvable(String),

    /// The engine refused to swap to the given source.
    SourceRejected(String),
}

impl EngineError {
    /// Returns the URL this error refers to.
    pub fn url(&self) -> &str {
        match self {
            EngineError::MalformedUrl(url)
            | EngineError::Unresolvable(url)
            | EngineError::SourceRejected(url) => url,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MalformedUrl(url) => write!(f, "Malformed media URL: {}", url),
            EngineError::Unresolvable(url) => write!(f, "Unresolvable media URL: {}", url),
            EngineError::SourceRejected(url) => write!(f, "Media source rejected: {}", url),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Engine(e) => write!(f, "Engine Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        Error::Engine(err)
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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
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
    fn engine_error_wraps_into_error() {
        let err: Error = EngineError::Unresolvable("https://cdn/x.m3u8".into()).into();
        assert_eq!(
            format!("{}", err),
            "Engine Error: Unresolvable media URL: https://cdn/x.m3u8"
        );
    }

    #[test]
    fn engine_error_exposes_url() {
        let err = EngineError::MalformedUrl("not a url".into());
        assert_eq!(err.url(), "not a url");
        assert!(format!("{}", err).starts_with("Malformed"));
    }
}
