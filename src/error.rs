//! Error types for the converter shell

use std::{fmt, io};

use dmsconv_types::ParseAngleError;

/// Result with the [`ShellError`]
pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Debug)]
/// Failures outside of the form: reading the configuration or parsing the command arguments
pub enum ShellError {
    /// Cannot read a file
    Io(io::Error),
    /// Bad configuration file
    Config(toml::de::Error),
    /// Too many decimal digits requested by the configuration
    Places {
        /// The configuration key
        key: &'static str,
        /// The requested number of digits
        value: usize,
        /// The biggest allowed number of digits
        max: usize,
    },
    /// Bad angle notation
    Angle(ParseAngleError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Places { key, value, max } => {
                write!(f, "Configuration error: {key} = {value} exceeds {max}")
            }
            Self::Angle(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Places { .. } => None,
            Self::Angle(e) => Some(e),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for ShellError {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error)
    }
}

impl From<ParseAngleError> for ShellError {
    fn from(error: ParseAngleError) -> Self {
        Self::Angle(error)
    }
}
