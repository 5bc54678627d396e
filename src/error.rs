// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Interaction handlers never fail: missing targets, gestures without a start
//! event and out-of-range navigation are absorbed as no-ops or clamped. Errors
//! only surface from binding a gallery to malformed markup and from the ambient
//! file/JSON formats (configuration, variation parameters, replay scenarios).

use crate::dom::Role;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required structural role was not found under the gallery container.
    #[error("gallery markup is missing the {role} element")]
    MissingElement { role: Role },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Variation image parameters could not be parsed.
    #[error("Variation Error: {0}")]
    Variations(String),

    /// A replay scenario could not be parsed or references unknown elements.
    #[error("Scenario Error: {0}")]
    Scenario(String),
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
