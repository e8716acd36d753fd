//! Display settings of the converter shell

use std::{fs, path::Path};

use dmsconv_types::Direction;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// The biggest number of decimal digits the form shows
pub const MAX_PLACES: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// How the form shows its results
pub struct ShellConfig {
    /// Decimal digits of the decimal degrees result
    pub decimal_places: usize,
    /// Decimal digits of the arc seconds in the DMS result
    pub seconds_places: usize,
    /// The direction selected on the slider when the form is created
    pub default_direction: Direction,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            decimal_places: 6,
            seconds_places: 2,
            default_direction: Direction::North,
        }
    }
}

impl ShellConfig {
    /// Load the configuration from the TOML file, or use the defaults
    /// when no file is given. Missing keys take their default values.
    ///
    /// # Errors
    /// The file cannot be read or is not a valid configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("No configuration file, using defaults");
            return Ok(Self::default());
        };

        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse the configuration from the TOML text
    ///
    /// # Errors
    /// Unknown value types or directions,
    /// more than [`MAX_PLACES`] decimal digits.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.check_places()?;
        Ok(config)
    }

    fn check_places(&self) -> Result<()> {
        for (key, value) in [
            ("decimal_places", self.decimal_places),
            ("seconds_places", self.seconds_places),
        ] {
            if value > MAX_PLACES {
                return Err(ShellError::Places {
                    key,
                    value,
                    max: MAX_PLACES,
                });
            }
        }
        Ok(())
    }
}
