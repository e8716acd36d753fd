//! The angle can be represented either as:
//!  - signed decimal degrees, where the sign stands for the direction
//!    (negative is South or West);
//!  - DMS (degrees, minutes, seconds) with the explicit direction letter.

use std::{fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{Axis, Direction},
    utils::{sexagesimal, Magnitude, StripChar},
};

use self::consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN, DEGREES_FD,
    DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_FD, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE,
};
pub use self::errors::{AngleNotInRange, ParseAngleError};

mod consts;
mod errors;
mod parse;

/// Convert the DMS parts into the signed decimal degrees.
///
/// No range validation performed: the minutes and seconds are taken as is
/// and the sign of the degrees is ignored.
/// Use [`DmsAngle::new`](struct.DmsAngle.html#method.new) to get a validated angle.
///
/// If any of the parts is not a finite number, the [`DecimalAngle::NAN`] is returned.
///
/// ```
/// # use dmsconv_types::{to_decimal, Direction};
/// let lat = to_decimal(Direction::North, 40.0, 26.0, 46.0);
/// assert_eq!(format!("{:.6}", lat), "40.446111°");
/// ```
pub fn to_decimal(direction: Direction, degrees: f64, minutes: f64, seconds: f64) -> DecimalAngle {
    if !(degrees.is_finite() && minutes.is_finite() && seconds.is_finite()) {
        return DecimalAngle::NAN;
    }

    let magnitude = degrees.abs() + minutes / MINUTES_IN_DEGREE + seconds / SECONDS_IN_DEGREE;
    if direction.is_negative() {
        DecimalAngle(-magnitude)
    } else {
        DecimalAngle(magnitude)
    }
}

/// Convert the signed decimal degrees into DMS.
///
/// The direction is _guessed_ by the magnitude (see [`Axis::guess`]):
/// every angle up to 90 degrees is a latitude (North or South),
/// bigger ones are longitudes (East or West).
///
/// # Errors
/// - the value is not finite;
/// - the magnitude is more than 180 degrees.
pub fn to_dms(decimal_degrees: f64) -> Result<DmsAngle, AngleNotInRange> {
    if !decimal_degrees.is_finite() {
        return Err(AngleNotInRange::NotFinite);
    }

    DmsAngle::from_decimal_on(Axis::guess(decimal_degrees), decimal_degrees)
}

/// Render the DMS parts as `40° 26' 46.00"`.
///
/// The signs are dropped: the direction should be shown separately.
pub fn format_dms(degrees: f64, minutes: f64, seconds: f64) -> String {
    let mut res = String::new();
    write_dms(&mut res, (degrees, minutes, seconds), SECONDS_FD)
        .expect("Writing into a String never fails");
    res
}

fn write_dms<W: fmt::Write>(w: &mut W, parts: (f64, f64, f64), seconds_fd: usize) -> fmt::Result {
    let (degrees, minutes, seconds) = parts;
    let (degrees, minutes, seconds) =
        carry_rounding((degrees.abs(), minutes.abs(), seconds.abs()), seconds_fd);
    write!(
        w,
        "{}{} {}{} {:.*}{}",
        degrees,
        DEGREE_SIGN,
        minutes,
        ASCII_ARC_MINUTE_SIGN,
        seconds_fd,
        seconds,
        ASCII_ARC_SECOND_SIGN,
    )
}

/// Seconds like 59.996 are printed as `60.00` with 2 digits,
/// so the full minute goes to the minutes (and the full degree to the degrees).
fn carry_rounding(parts: (f64, f64, f64), seconds_fd: usize) -> (f64, f64, f64) {
    let (degrees, minutes, seconds) = parts;
    let shown: f64 = format!("{:.*}", seconds_fd, seconds)
        .parse()
        .unwrap_or(seconds);
    if shown < SECONDS_IN_MINUTE {
        return parts;
    }

    let minutes = minutes + 1.0;
    if minutes < MINUTES_IN_DEGREE {
        (degrees, minutes, 0.0)
    } else {
        (degrees + 1.0, 0.0, 0.0)
    }
}

const fn overflow_on(axis: Axis) -> AngleNotInRange {
    match axis {
        Axis::Latitude => AngleNotInRange::Latitude,
        Axis::Longitude => AngleNotInRange::Longitude,
    }
}

/// Signed decimal degrees.
///
/// Negative values are for the southern latitudes or the western longitudes.
/// The value can also be a NaN when it was calculated from the invalid parts.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DecimalAngle(f64);

impl DecimalAngle {
    /// The result of the conversion of the invalid numbers
    pub const NAN: Self = Self(f64::NAN);

    /// Wrap the number of degrees
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// The number of degrees
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Was the angle produced from the invalid parts
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Represent as DMS, guessing the direction by the magnitude.
    ///
    /// # Errors
    /// See [`to_dms`](fn.to_dms.html).
    pub fn to_dms(self) -> Result<DmsAngle, AngleNotInRange> {
        to_dms(self.0)
    }
}

impl From<f64> for DecimalAngle {
    fn from(degrees: f64) -> Self {
        Self(degrees)
    }
}

impl From<DecimalAngle> for f64 {
    fn from(angle: DecimalAngle) -> Self {
        angle.0
    }
}

impl Neg for DecimalAngle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl FromStr for DecimalAngle {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = s.strip_suffix_char(DEGREE_SIGN).unwrap_or_else(|| s.to_string());
        let degrees: f64 = number.parse()?;
        if !degrees.is_finite() {
            return Err(AngleNotInRange::NotFinite.into());
        }
        Ok(Self(degrees))
    }
}

impl fmt::Display for DecimalAngle {
    /// The precision of the formatter is the number of decimal digits (6 by default)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEGREES_FD);
        // do not show the negative zero
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{:.*}{}", precision, value, DEGREE_SIGN)
    }
}

/// The angle as the direction and the degree, arc minute and arc second parts
///
/// The deserialized parts go through the same checks as [`DmsAngle::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DmsParts", into = "DmsParts"))]
pub struct DmsAngle {
    direction: Direction,
    degrees: f64,
    minutes: f64,
    seconds: f64,
}

/// Unchecked parts of the [`DmsAngle`] as they are stored
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct DmsParts {
    direction: Direction,
    degrees: f64,
    minutes: f64,
    seconds: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<DmsParts> for DmsAngle {
    type Error = AngleNotInRange;

    fn try_from(parts: DmsParts) -> Result<Self, Self::Error> {
        Self::new(parts.direction, parts.degrees, parts.minutes, parts.seconds)
    }
}

#[cfg(feature = "serde")]
impl From<DmsAngle> for DmsParts {
    fn from(angle: DmsAngle) -> Self {
        Self {
            direction: angle.direction,
            degrees: angle.degrees,
            minutes: angle.minutes,
            seconds: angle.seconds,
        }
    }
}

impl DmsAngle {
    /// Construct the angle from its parts.
    ///
    /// # Errors
    /// - some part is not finite or negative;
    /// - minutes or seconds are not less than 60;
    /// - the total angle is more than 90 degrees for North and South
    ///   or more than 180 degrees for East and West.
    pub fn new(
        direction: Direction,
        degrees: f64,
        minutes: f64,
        seconds: f64,
    ) -> Result<Self, AngleNotInRange> {
        if !(degrees.is_finite() && minutes.is_finite() && seconds.is_finite()) {
            return Err(AngleNotInRange::NotFinite);
        }

        if degrees < 0.0 || minutes < 0.0 || seconds < 0.0 {
            return Err(AngleNotInRange::Negative);
        }

        if minutes >= MINUTES_IN_DEGREE {
            return Err(AngleNotInRange::ArcMinutes);
        }

        if seconds >= SECONDS_IN_MINUTE {
            return Err(AngleNotInRange::ArcSeconds);
        }

        let axis = direction.axis();
        let magnitude = degrees + minutes / MINUTES_IN_DEGREE + seconds / SECONDS_IN_DEGREE;
        if magnitude > axis.max_degrees() {
            return Err(overflow_on(axis));
        }

        Ok(Self {
            direction,
            degrees,
            minutes,
            seconds,
        })
    }

    /// Convert the signed decimal degrees into DMS
    /// on the explicitly given axis.
    ///
    /// # Errors
    /// - the value is not finite;
    /// - the magnitude is more than the maximum for the axis.
    pub fn from_decimal_on(axis: Axis, decimal_degrees: f64) -> Result<Self, AngleNotInRange> {
        if !decimal_degrees.is_finite() {
            return Err(AngleNotInRange::NotFinite);
        }

        let (magnitude, is_positive) = decimal_degrees.magnitude();
        if magnitude > axis.max_degrees() {
            return Err(overflow_on(axis));
        }

        let (degrees, minutes, seconds) = sexagesimal(magnitude);
        Ok(Self {
            direction: axis.direction(!is_positive),
            degrees,
            minutes,
            seconds,
        })
    }

    /// The direction (hemisphere)
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Latitude or longitude
    pub const fn axis(self) -> Axis {
        self.direction.axis()
    }

    /// The degrees part
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    /// The arc minutes part
    pub const fn minutes(self) -> f64 {
        self.minutes
    }

    /// The arc seconds part
    pub const fn seconds(self) -> f64 {
        self.seconds
    }

    /// The signed decimal degrees
    pub fn to_decimal(self) -> DecimalAngle {
        to_decimal(self.direction, self.degrees, self.minutes, self.seconds)
    }

    fn parse_with_direction(s: &str, direction: Direction) -> Result<Self, ParseAngleError> {
        let (degrees, minutes, seconds) = parse::dms_parts(s)?;
        Ok(Self::new(direction, degrees, minutes, seconds)?)
    }
}

impl TryFrom<DecimalAngle> for DmsAngle {
    type Error = AngleNotInRange;

    fn try_from(value: DecimalAngle) -> Result<Self, Self::Error> {
        value.to_dms()
    }
}

impl From<DmsAngle> for DecimalAngle {
    fn from(angle: DmsAngle) -> Self {
        angle.to_decimal()
    }
}

impl FromStr for DmsAngle {
    type Err = ParseAngleError;

    /// Parse the DMS notation with the direction letter as a prefix or suffix,
    /// e.g. `N40° 26' 46"` or `40°26′46″N`.
    ///
    /// The signed decimal degrees (e.g. `-73.985`) are also accepted,
    /// then the direction is guessed like in [`to_dms`](fn.to_dms.html).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAngleError::EmptyString);
        }

        let (rest, last) = s.split_last().ok_or(ParseAngleError::EmptyString)?;
        if let Ok(direction) = Direction::try_from(last) {
            // single space is allowed
            let rest = rest.strip_suffix(' ').unwrap_or(&rest);
            return Self::parse_with_direction(rest, direction);
        }

        let (first, rest) = s.split_first().ok_or(ParseAngleError::EmptyString)?;
        if let Ok(direction) = Direction::try_from(first) {
            // single space is allowed
            let rest = rest.strip_prefix(' ').unwrap_or(&rest);
            return Self::parse_with_direction(rest, direction);
        }

        if let Ok(decimal) = s.parse::<DecimalAngle>() {
            return Ok(decimal.to_dms()?);
        }

        Err(ParseAngleError::NoDirection)
    }
}

impl fmt::Display for DmsAngle {
    /// The default form is `N40° 26' 46.00"`,
    /// the alternate one (`{:#}`) is `40°26′46.00″N`.
    ///
    /// The precision of the formatter is the number of
    /// arc seconds' decimal digits (2 by default).
    /// When the seconds round up to 60 the minute is carried,
    /// so the printed text can always be parsed back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(SECONDS_FD);
        if f.alternate() {
            let (degrees, minutes, seconds) =
                carry_rounding((self.degrees, self.minutes, self.seconds), precision);
            write!(
                f,
                "{}{}{}{}{:.*}{}{}",
                degrees,
                DEGREE_SIGN,
                minutes,
                ARC_MINUTE_SIGN,
                precision,
                seconds,
                ARC_SECOND_SIGN,
                self.direction,
            )
        } else {
            write!(f, "{}", self.direction)?;
            write_dms(f, (self.degrees, self.minutes, self.seconds), precision)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::coord::Direction::{East, North, South, West};

    const EPS: f64 = 1e-6;

    fn total_seconds(angle: DmsAngle) -> f64 {
        angle.degrees() * SECONDS_IN_DEGREE + angle.minutes() * SECONDS_IN_MINUTE + angle.seconds()
    }

    #[test]
    fn new_york_latitude() {
        let lat = to_decimal(North, 40.0, 26.0, 46.0);
        assert_abs_diff_eq!(lat.degrees(), 40.446_111, epsilon = EPS);
    }

    #[test]
    fn north_pole() {
        assert_abs_diff_eq!(to_decimal(North, 90.0, 0.0, 0.0).degrees(), 90.0);
    }

    #[test]
    fn antimeridian_west() {
        assert_abs_diff_eq!(to_decimal(West, 180.0, 0.0, 0.0).degrees(), -180.0);
    }

    #[test]
    fn sign_law() {
        for &(deg, min, sec) in &[(0.0, 0.0, 1.0), (33.0, 27.0, 0.0), (70.0, 40.0, 12.5)] {
            let north = to_decimal(North, deg, min, sec);
            let south = to_decimal(South, deg, min, sec);
            assert_eq!(south, -north);

            let east = to_decimal(East, deg, min, sec);
            let west = to_decimal(West, deg, min, sec);
            assert_eq!(west, -east);
        }
    }

    #[test]
    fn negative_degrees_ignore_sign() {
        assert_eq!(
            to_decimal(North, -40.0, 30.0, 0.0),
            to_decimal(North, 40.0, 30.0, 0.0)
        );
    }

    #[test]
    fn no_range_checks_in_raw_conversion() {
        let nonsense = to_decimal(East, 400.0, 120.0, 0.0);
        assert_abs_diff_eq!(nonsense.degrees(), 402.0);
    }

    #[test]
    fn not_finite_parts_produce_nan() {
        assert!(to_decimal(North, f64::NAN, 0.0, 0.0).is_nan());
        assert!(to_decimal(South, 1.0, f64::INFINITY, 0.0).is_nan());
        assert!(to_decimal(East, 1.0, 2.0, f64::NEG_INFINITY).is_nan());
        assert!(!to_decimal(West, 1.0, 2.0, 3.0).is_nan());
    }

    #[test]
    fn to_dms_latitude() {
        let dms = to_dms(40.446_111).unwrap();
        assert_eq!(dms.direction(), North);
        assert_abs_diff_eq!(dms.degrees(), 40.0);
        assert_abs_diff_eq!(dms.minutes(), 26.0);
        assert_abs_diff_eq!(dms.seconds(), 46.0, epsilon = 1e-3);
    }

    #[test]
    fn small_negative_is_guessed_as_south() {
        // the magnitude is less than 90, so it can only be treated as a latitude
        let dms = to_dms(-73.985).unwrap();
        assert_eq!(dms.direction(), South);
        assert_abs_diff_eq!(dms.degrees(), 73.0);
        assert_abs_diff_eq!(dms.minutes(), 59.0);
        assert_abs_diff_eq!(dms.seconds(), 6.0, epsilon = EPS);
    }

    #[test]
    fn big_negative_is_guessed_as_west() {
        let dms = to_dms(-122.5).unwrap();
        assert_eq!(dms.direction(), West);
        assert_eq!(dms.axis(), Axis::Longitude);
        assert_abs_diff_eq!(dms.degrees(), 122.0);
        assert_abs_diff_eq!(dms.minutes(), 30.0);
        assert_abs_diff_eq!(dms.seconds(), 0.0);
    }

    #[test]
    fn big_positive_is_guessed_as_east() {
        let dms = to_dms(90.5).unwrap();
        assert_eq!(dms.direction(), East);
    }

    #[test]
    fn zero_is_north() {
        assert_eq!(to_dms(0.0).unwrap().direction(), North);
        assert_eq!(to_dms(-0.0).unwrap().direction(), North);
    }

    #[test]
    fn boundaries_of_guess() {
        assert_eq!(to_dms(-90.0).unwrap().direction(), South);
        assert_eq!(to_dms(180.0).unwrap().direction(), East);
        assert_eq!(to_dms(-180.0).unwrap().direction(), West);
    }

    #[test]
    fn to_dms_out_of_range() {
        assert_eq!(to_dms(180.5), Err(AngleNotInRange::Longitude));
        assert_eq!(to_dms(f64::NAN), Err(AngleNotInRange::NotFinite));
        assert_eq!(to_dms(f64::INFINITY), Err(AngleNotInRange::NotFinite));
    }

    #[test]
    fn explicit_axis() {
        let lon = DmsAngle::from_decimal_on(Axis::Longitude, -73.985).unwrap();
        assert_eq!(lon.direction(), West);
        assert_abs_diff_eq!(lon.degrees(), 73.0);
        assert_abs_diff_eq!(lon.minutes(), 59.0);

        assert_eq!(
            DmsAngle::from_decimal_on(Axis::Latitude, 91.0),
            Err(AngleNotInRange::Latitude)
        );
    }

    #[test]
    fn round_trip() {
        for &dir in &Direction::ALL {
            for &deg in &[0.0, 1.0, 45.0, 89.0] {
                for &min in &[0.0, 1.0, 30.0, 59.0] {
                    for &sec in &[0.0, 12.5, 59.5] {
                        let origin = DmsAngle::new(dir, deg, min, sec).unwrap();
                        let restored = to_dms(origin.to_decimal().degrees()).unwrap();

                        if total_seconds(origin) > 0.0 {
                            assert_eq!(restored.direction().is_negative(), dir.is_negative());
                        }
                        assert_abs_diff_eq!(
                            total_seconds(restored),
                            total_seconds(origin),
                            epsilon = EPS * SECONDS_IN_DEGREE
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn round_trip_on_explicit_axis_keeps_direction() {
        let origin = DmsAngle::new(West, 12.0, 34.0, 56.0).unwrap();
        let restored =
            DmsAngle::from_decimal_on(Axis::Longitude, origin.to_decimal().degrees()).unwrap();
        assert_eq!(restored.direction(), West);
        assert_abs_diff_eq!(total_seconds(restored), total_seconds(origin), epsilon = 1e-6);

        // the heuristic reassigns the direction for small longitudes
        assert_eq!(to_dms(origin.to_decimal().degrees()).unwrap().direction(), South);
    }

    #[test]
    fn validated_boundaries() {
        assert!(DmsAngle::new(North, 90.0, 0.0, 0.0).is_ok());
        assert!(DmsAngle::new(West, 180.0, 0.0, 0.0).is_ok());
        assert!(DmsAngle::new(South, 89.0, 59.0, 59.99).is_ok());
    }

    #[test]
    fn validated_errors() {
        assert_eq!(
            DmsAngle::new(North, 90.0, 0.0, 1.0),
            Err(AngleNotInRange::Latitude)
        );
        assert_eq!(
            DmsAngle::new(South, 91.0, 0.0, 0.0),
            Err(AngleNotInRange::Latitude)
        );
        assert_eq!(
            DmsAngle::new(East, 180.0, 1.0, 0.0),
            Err(AngleNotInRange::Longitude)
        );
        assert_eq!(
            DmsAngle::new(East, 10.0, 60.0, 0.0),
            Err(AngleNotInRange::ArcMinutes)
        );
        assert_eq!(
            DmsAngle::new(East, 10.0, 0.0, 60.0),
            Err(AngleNotInRange::ArcSeconds)
        );
        assert_eq!(
            DmsAngle::new(North, -1.0, 0.0, 0.0),
            Err(AngleNotInRange::Negative)
        );
        assert_eq!(
            DmsAngle::new(North, 1.0, f64::NAN, 0.0),
            Err(AngleNotInRange::NotFinite)
        );
    }

    #[test]
    fn format_parts() {
        assert_eq!(format_dms(40.0, 26.0, 46.0), "40° 26' 46.00\"");
    }

    #[test]
    fn format_drops_signs() {
        assert_eq!(format_dms(-73.0, -59.0, -6.004), "73° 59' 6.00\"");
    }

    #[test]
    fn format_fractional_degrees() {
        assert_eq!(format_dms(12.5, 0.0, 0.0), "12.5° 0' 0.00\"");
    }

    #[test]
    fn print_dms() {
        let dms = DmsAngle::new(North, 40.0, 26.0, 46.0).unwrap();
        assert_eq!(dms.to_string(), "N40° 26' 46.00\"");
        assert_eq!(format!("{:.1}", dms), "N40° 26' 46.0\"");
        assert_eq!(format!("{:#}", dms), "40°26′46.00″N");
    }

    #[test]
    fn print_carries_rounded_seconds() {
        let dms = DmsAngle::new(North, 10.0, 59.0, 59.996).unwrap();
        assert_eq!(dms.to_string(), "N11° 0' 0.00\"");
        assert_eq!(format!("{:#}", dms), "11°0′0.00″N");
        assert_eq!(format!("{:.3}", dms), "N10° 59' 59.996\"");

        let dms = DmsAngle::new(East, 12.0, 34.0, 59.999).unwrap();
        assert_eq!(dms.to_string(), "E12° 35' 0.00\"");
        assert_eq!(format_dms(12.0, 34.0, 59.999), "12° 35' 0.00\"");
    }

    #[test]
    fn printed_rounded_seconds_parse_back() {
        let dms = to_dms(-89.999_999).unwrap();
        let printed = dms.to_string();
        assert_eq!(printed, "S90° 0' 0.00\"");

        let parsed: DmsAngle = printed.parse().unwrap();
        assert_eq!(parsed.direction(), South);
        assert_abs_diff_eq!(total_seconds(parsed), total_seconds(dms), epsilon = 0.01);
    }

    #[test]
    fn print_converted_dms() {
        let dms = to_dms(40.446_111).unwrap();
        assert_eq!(dms.to_string(), "N40° 26' 46.00\"");
    }

    #[test]
    fn print_decimal() {
        let lat = to_decimal(North, 40.0, 26.0, 46.0);
        assert_eq!(lat.to_string(), "40.446111°");
        assert_eq!(format!("{:.2}", lat), "40.45°");
    }

    #[test]
    fn print_negative_zero() {
        let zero = to_decimal(South, 0.0, 0.0, 0.0);
        assert_eq!(zero.to_string(), "0.000000°");
    }

    #[test]
    fn parse_decimal() {
        let angle: DecimalAngle = "-73.985".parse().unwrap();
        assert_abs_diff_eq!(angle.degrees(), -73.985);

        let angle: DecimalAngle = " 12.5° ".parse().unwrap();
        assert_abs_diff_eq!(angle.degrees(), 12.5);
    }

    #[test]
    fn parse_bad_decimal() {
        assert!(matches!(
            "12,5".parse::<DecimalAngle>(),
            Err(ParseAngleError::Float(_))
        ));
        assert!(matches!(
            "NaN".parse::<DecimalAngle>(),
            Err(ParseAngleError::Range(AngleNotInRange::NotFinite))
        ));
    }

    #[test]
    fn parse_printed() {
        let dms = DmsAngle::new(South, 33.0, 27.0, 5.5).unwrap();
        assert_eq!(dms.to_string().parse::<DmsAngle>().unwrap(), dms);
        assert_eq!(format!("{:#}", dms).parse::<DmsAngle>().unwrap(), dms);
    }

    #[test]
    fn parse_direction_prefix_with_space() {
        let dms: DmsAngle = "W 73° 59' 6\"".parse().unwrap();
        assert_eq!(dms, DmsAngle::new(West, 73.0, 59.0, 6.0).unwrap());
    }

    #[test]
    fn parse_direction_suffix_with_space() {
        let dms: DmsAngle = "40° 26' 46\" N".parse().unwrap();
        assert_eq!(dms, DmsAngle::new(North, 40.0, 26.0, 46.0).unwrap());
    }

    #[test]
    fn parse_degrees_only() {
        let dms: DmsAngle = "E179°".parse().unwrap();
        assert_eq!(dms, DmsAngle::new(East, 179.0, 0.0, 0.0).unwrap());
    }

    #[test]
    fn parse_signed_decimal_guesses_direction() {
        let dms: DmsAngle = "-122.5".parse().unwrap();
        assert_eq!(dms.direction(), West);
        assert_abs_diff_eq!(dms.minutes(), 30.0);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "".parse::<DmsAngle>(),
            Err(ParseAngleError::EmptyString)
        ));
        assert!(matches!(
            "X40°".parse::<DmsAngle>(),
            Err(ParseAngleError::NoDirection)
        ));
        assert!(matches!(
            "N40 deg".parse::<DmsAngle>(),
            Err(ParseAngleError::DmsNotation)
        ));
        assert!(matches!(
            "N95°".parse::<DmsAngle>(),
            Err(ParseAngleError::Range(AngleNotInRange::Latitude))
        ));
        assert!(matches!(
            "E10° 61'".parse::<DmsAngle>(),
            Err(ParseAngleError::Range(AngleNotInRange::ArcMinutes))
        ));
    }

    #[test]
    fn error_messages() {
        let err = "N95°".parse::<DmsAngle>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot parse angle: Latitude should not exceed 90 degrees"
        );
    }

    #[test]
    fn conversions_between_representations() {
        let dms = DmsAngle::new(East, 30.0, 18.0, 31.0).unwrap();
        let decimal: DecimalAngle = dms.into();
        assert_abs_diff_eq!(f64::from(decimal), 30.308_611, epsilon = EPS);

        let back = DmsAngle::try_from(decimal).unwrap();
        assert_eq!(back.direction(), North);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_valid_parts() {
        let json = r#"{"direction":"W","degrees":73.0,"minutes":59.0,"seconds":6.0}"#;
        let dms: DmsAngle = serde_json::from_str(json).unwrap();
        assert_eq!(dms, DmsAngle::new(West, 73.0, 59.0, 6.0).unwrap());

        let stored = serde_json::to_string(&dms).unwrap();
        assert_eq!(
            stored,
            r#"{"direction":"West","degrees":73.0,"minutes":59.0,"seconds":6.0}"#
        );
        assert_eq!(serde_json::from_str::<DmsAngle>(&stored).unwrap(), dms);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_out_of_range_parts() {
        let negative = r#"{"direction":"N","degrees":500.0,"minutes":99.0,"seconds":-3.0}"#;
        let err = serde_json::from_str::<DmsAngle>(negative).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Angle's parts should not be negative"));

        let too_far = r#"{"direction":"S","degrees":91.0,"minutes":0.0,"seconds":0.0}"#;
        let err = serde_json::from_str::<DmsAngle>(too_far).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Latitude should not exceed 90 degrees"));

        let minutes = r#"{"direction":"E","degrees":10.0,"minutes":60.0,"seconds":0.0}"#;
        assert!(serde_json::from_str::<DmsAngle>(minutes).is_err());
    }
}
