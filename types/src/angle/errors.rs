use std::{error::Error, fmt, num::ParseFloatError};

use crate::{coord::ParseDirectionError, enum_trivial_from_impl};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Some part of an angle does not fit the coordinate
pub enum AngleNotInRange {
    /// NaN or infinity
    NotFinite,
    /// deg < 0, min < 0 or sec < 0
    Negative,
    /// deg > 90
    Latitude,
    /// deg > 180
    Longitude,
    /// min >= 60
    ArcMinutes,
    /// sec >= 60
    ArcSeconds,
}

impl fmt::Display for AngleNotInRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotFinite => "Angle's parts should be finite numbers",
            Self::Negative => "Angle's parts should not be negative",
            Self::Latitude => "Latitude should not exceed 90 degrees",
            Self::Longitude => "Longitude should not exceed 180 degrees",
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for AngleNotInRange {}

#[derive(Debug)]
/// The string cannot be interpreted as an angle
pub enum ParseAngleError {
    /// The parts are parsed but do not form a valid angle
    Range(AngleNotInRange),
    /// Bad decimal number
    Float(ParseFloatError),
    /// Bad direction letter
    Direction(ParseDirectionError),
    /// Not matched by any of Degree-Minute-Second patterns
    DmsNotation,
    /// Nothing to parse
    EmptyString,
    /// DMS notation requires the direction letter as a prefix or suffix
    NoDirection,
}

enum_trivial_from_impl!(AngleNotInRange => ParseAngleError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseAngleError:Float);
enum_trivial_from_impl!(ParseDirectionError => ParseAngleError:Direction);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Direction(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
            Self::EmptyString => write!(f, "empty string provided"),
            Self::NoDirection => write!(f, "direction (hemisphere) was not detected"),
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Float(inner) => Some(inner),
            Self::Direction(inner) => Some(inner),
            Self::DmsNotation | Self::EmptyString | Self::NoDirection => None,
        }
    }
}
