//! Utilities functions which do not linked to domain

use num_traits::Float;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Split a signed floating value into its magnitude and the sign
pub(crate) trait Magnitude: Float {
    /// The absolute value and whether the value is non-negative.
    ///
    /// Negative zero is considered non-negative.
    fn magnitude(self) -> (Self, bool) {
        (self.abs(), self >= Self::zero())
    }
}

impl<F: Float> Magnitude for F {}

/// Split the non-negative value into the whole units,
/// whole sixtieths and the rest expressed in 1/3600-th.
///
/// For the angles it gives the degrees, arc minutes and arc seconds.
pub(crate) fn sexagesimal<F: Float>(value: F) -> (F, F, F) {
    let sixty = F::from(60_u8).expect("60 is representable in any float");

    let whole = value.floor();
    let minutes_full = (value - whole) * sixty;
    let minutes = minutes_full.floor();
    let seconds = (minutes_full - minutes) * sixty;
    (whole, minutes, seconds)
}

/// Strip the given character from the beginning or the end
pub(crate) trait StripChar {
    /// Strip the character from the end
    fn strip_suffix_char(self, ch: char) -> Option<String>;
    /// Split into the first character and the rest of the string
    fn split_first(self) -> Option<(char, String)>;
    /// Split into the last character and the rest of the string
    fn split_last(self) -> Option<(String, char)>;
}

impl StripChar for &str {
    fn strip_suffix_char(self, ch: char) -> Option<String> {
        self.strip_suffix(ch).map(ToString::to_string)
    }

    fn split_first(self) -> Option<(char, String)> {
        let mut chars = self.chars();
        chars.next().map(|head| (head, chars.as_str().to_string()))
    }

    fn split_last(self) -> Option<(String, char)> {
        let mut chars = self.chars();
        chars
            .next_back()
            .map(|tail| (chars.as_str().to_string(), tail))
    }
}
