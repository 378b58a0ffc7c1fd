//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables. Variables set to an
//! empty or whitespace-only string are treated as unset.

use std::env;
use std::str::FromStr;

/// Get an optional environment variable, trimmed.
pub fn get_env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &str, default: impl Into<String>) -> String {
    get_env_opt(name).unwrap_or_else(|| default.into())
}

/// Parse an optional environment variable; `Ok(None)` when unset.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(val) => val.parse::<T>().map(Some).map_err(|_| Error::WrongFormat(name)),
        None => Ok(None),
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
