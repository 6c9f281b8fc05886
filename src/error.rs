// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Feed(FeedError),
}

/// Problems found while validating a notification snapshot supplied by the
/// notification service.
///
/// Each variant maps to an i18n key so the host can raise a localized toast.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The payload could not be parsed as a list of notifications.
    Malformed(String),

    /// Two notifications in the same snapshot share an id.
    DuplicateId(u64),

    /// No feed source was configured.
    NotConfigured,
}

impl FeedError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FeedError::Malformed(_) => "notification-feed-malformed",
            FeedError::DuplicateId(_) => "notification-feed-duplicate-id",
            FeedError::NotConfigured => "notification-feed-not-configured",
        }
    }
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Malformed(msg) => write!(f, "Malformed feed: {}", msg),
            FeedError::DuplicateId(id) => write!(f, "Duplicate notification id: {}", id),
            FeedError::NotConfigured => write!(f, "No feed source configured"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Feed(e) => write!(f, "Feed Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Returns the i18n key of the toast describing this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Feed(err) => err.i18n_key(),
        }
    }
}

impl From<FeedError> for Error {
    fn from(err: FeedError) -> Self {
        Error::Feed(err)
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Feed(FeedError::Malformed(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
