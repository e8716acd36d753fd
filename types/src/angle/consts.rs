pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const ASCII_ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ASCII_ARC_SECOND_SIGN: char = '"';

/// The number of arc seconds' decimal digits shown by default
pub(crate) const SECONDS_FD: usize = 2;
/// The number of decimal digits shown for decimal degrees by default
pub(crate) const DEGREES_FD: usize = 6;
