use lazy_static::lazy_static;
use regex::Regex;

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN,
        DEGREE_SIGN,
    },
    errors::ParseAngleError,
};

/// Construct regular expression to parse Degree-Minute-Second representation of an angle
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        (
            format!("(?:{DEGREE_SIGN}|\\*)?"),
            ASCII_ARC_MINUTE_SIGN,
            ASCII_ARC_SECOND_SIGN,
        )
    } else {
        (DEGREE_SIGN.to_string(), ARC_MINUTE_SIGN, ARC_SECOND_SIGN)
    };

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<deg>\d{{1,3}}(?:\.\d+)?)                    # mandatory degree VALUE (0..=999) - requires more validation!
        {}                                              # degree sign (can be mandatory or optional)
        (?:\x20?                                        # minutes and seconds group optionally started with the space
            (?P<min>\d{{1,2}}(?:\.\d+)?)                    # minutes VALUE (0..=99) - validated later
            {}                                              # arcminute sign
            (?:\x20?                                        # seconds group optionally started with the space
                (?P<sec>\d{{1,2}}(?:\.\d+)?)                    # seconds VALUE with the optional decimal fraction
                {}                                              # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#,
        deg, min, sec,
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(&parse_dms_re(false)).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex = Regex::new(&parse_dms_re(true)).expect("ASCII regex is valid");
}

/// Extract the degrees, minutes and seconds from the DMS notation
/// without any direction letter.
///
/// Missing minutes and seconds are zeros.
pub(super) fn dms_parts(s: &str) -> Result<(f64, f64, f64), ParseAngleError> {
    let capture = RE_UNICODE
        .captures(s)
        .or_else(|| RE_ASCII.captures(s))
        .ok_or(ParseAngleError::DmsNotation)?;

    let deg = capture.name("deg").ok_or(ParseAngleError::DmsNotation)?;
    let deg = deg.as_str().parse()?;
    let min = capture.name("min").map_or("0", |m| m.as_str()).parse()?;
    let sec = capture.name("sec").map_or("0", |m| m.as_str()).parse()?;
    Ok((deg, min, sec))
}
