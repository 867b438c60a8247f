// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Toast(ToastError),
}

/// Failures on the toast presentation path.
///
/// `present` swallows these after logging them; the `try_` variants and
/// the overlay installation surface them to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastError {
    /// The overlay could not be attached to a usable window surface.
    InstallFailed(String),

    /// An item with the same identifier is already in the store.
    DuplicateId(u64),

    /// The configured queue cap was reached.
    QueueOverflow { limit: usize },
}

impl fmt::Display for ToastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastError::InstallFailed(reason) => write!(f, "overlay install failed: {}", reason),
            ToastError::DuplicateId(id) => write!(f, "toast #{} is already presented", id),
            ToastError::QueueOverflow { limit } => {
                write!(f, "toast queue is full ({} active)", limit)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Toast(e) => write!(f, "Toast Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ToastError> for Error {
    fn from(err: ToastError) -> Self {
        Error::Toast(err)
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
