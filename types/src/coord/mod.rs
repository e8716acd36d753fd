use std::{error::Error, fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::Direction::{East, North, South, West};

/// The kind of geographic coordinate an angle represents
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The angle between the equatorial plane and the point along the meridian.
    /// [Read more](https://en.wikipedia.org/wiki/Latitude).
    Latitude,
    /// The angle between the meridian of the point and the prime meridian.
    /// [Read more](https://en.wikipedia.org/wiki/Longitude).
    Longitude,
}

impl Axis {
    /// The maximum magnitude of the coordinate in degrees
    pub const fn max_degrees(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    /// Guess the axis by the magnitude of the angle.
    ///
    /// Every value up to the right angle is treated as a latitude,
    /// everything beyond it can only be a longitude.
    /// There is no way to tell a small longitude from a latitude,
    /// so prefer [`DmsAngle::from_decimal_on`](struct.DmsAngle.html#method.from_decimal_on)
    /// when the axis is known.
    pub fn guess(decimal_degrees: f64) -> Self {
        if decimal_degrees.abs() <= Self::Latitude.max_degrees() {
            Self::Latitude
        } else {
            Self::Longitude
        }
    }

    /// The direction on this axis for the positive or negative angle
    pub const fn direction(self, is_negative: bool) -> Direction {
        match (self, is_negative) {
            (Self::Latitude, false) => North,
            (Self::Latitude, true) => South,
            (Self::Longitude, false) => East,
            (Self::Longitude, true) => West,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        };
        write!(f, "{name}")
    }
}

/// Cardinal direction (hemisphere) of a coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Positive latitude
    #[cfg_attr(feature = "serde", serde(alias = "N"))]
    North,
    /// Negative latitude
    #[cfg_attr(feature = "serde", serde(alias = "S"))]
    South,
    /// Positive longitude
    #[cfg_attr(feature = "serde", serde(alias = "E"))]
    East,
    /// Negative longitude
    #[cfg_attr(feature = "serde", serde(alias = "W"))]
    West,
}

impl Direction {
    /// All the directions in the order of their letters in the compass rose
    pub const ALL: [Self; 4] = [North, East, South, West];

    /// Which coordinate the direction belongs to
    pub const fn axis(self) -> Axis {
        match self {
            North | South => Axis::Latitude,
            East | West => Axis::Longitude,
        }
    }

    /// South and West produce negative decimal degrees
    pub const fn is_negative(self) -> bool {
        matches!(self, South | West)
    }

    /// Single letter code
    pub const fn letter(self) -> char {
        match self {
            North => 'N',
            South => 'S',
            East => 'E',
            West => 'W',
        }
    }

    /// Human readable name with the letter code, e.g. `North (N)`
    pub const fn label(self) -> &'static str {
        match self {
            North => "North (N)",
            South => "South (S)",
            East => "East (E)",
            West => "West (W)",
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The string does not denote any direction
pub struct ParseDirectionError {
    failed: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse Direction from {:?}", self.failed)
    }
}

impl Error for ParseDirectionError {}

impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(North),
            'S' => Ok(South),
            'E' => Ok(East),
            'W' => Ok(West),
            _ => Err(ParseDirectionError {
                failed: c.to_string(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Either the letter code or the full name in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::try_from(c.to_ascii_uppercase());
        }

        Self::ALL
            .into_iter()
            .find(|dir| format!("{dir:?}").eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError {
                failed: s.to_string(),
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
