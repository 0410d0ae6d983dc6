use std::path::PathBuf;

/// Basic Result alias with [`enum@Error`]
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

use thiserror::Error;
/// Error type used across the preflight codebase
#[derive(Error, Debug)]
pub enum Error {
    #[error("config not found at {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("invalid {path}: {message}")]
    Invalid { path: String, message: String },
    #[error("{0:?}")]
    Any(AnyError),
}

impl Error {
    pub(crate) fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Provides shorthand to map errs into [`enum@Error`] using `.somehow()`
#[doc(hidden)]
pub trait _Somehow<T, E> {
    fn somehow(self) -> Result<T, Error>;
}

impl<T, E> _Somehow<T, E> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn somehow(self) -> Result<T, Error> {
        self.map_err(|e| Error::Any(AnyError(format!("{e}"))))
    }
}

#[derive(Debug)]
#[doc(hidden)]
pub struct AnyError(pub String);

/// Shorthand to create formatted [`enum@Error`] values like `e!("{x:?}")`
#[macro_export]
macro_rules! e {
    ($($tokens:tt),+) => {
        $crate::Error::Any($crate::AnyError(format!($($tokens),+)))
    };
}
