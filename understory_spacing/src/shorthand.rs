// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The CSS four-value shorthand (`padding: 1 2 3 4`).
//!
//! Parsing follows the CSS expansion rules for one to four values:
//!
//! | values | top | right | bottom | left |
//! |---|---|---|---|---|
//! | `a` | a | a | a | a |
//! | `a b` | a | b | a | b |
//! | `a b c` | a | b | c | b |
//! | `a b c d` | a | b | c | d |
//!
//! A trailing `px` unit on each value is accepted and dropped. Formatting always
//! writes four unitless values separated by single spaces.

use core::fmt;
use core::str::FromStr;

use crate::field::Side;

/// Four side values in CSS shorthand order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shorthand {
    /// Top value.
    pub top: f64,
    /// Right value.
    pub right: f64,
    /// Bottom value.
    pub bottom: f64,
    /// Left value.
    pub left: f64,
}

/// Error returned when a shorthand string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShorthandError {
    /// The string held no values.
    #[error("shorthand is empty")]
    Empty,
    /// More than four values were given.
    #[error("shorthand takes at most 4 values, got {0}")]
    TooManyValues(usize),
    /// A value was not a finite number.
    #[error("shorthand value {index} is not a number")]
    InvalidNumber {
        /// Zero-based position of the offending token.
        index: usize,
    },
    /// A value was negative.
    #[error("shorthand value {index} is negative")]
    Negative {
        /// Zero-based position of the offending token.
        index: usize,
    },
}

impl Shorthand {
    /// Shorthand from explicit top/right/bottom/left values.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same value on every side.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Value for `side`.
    pub const fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Replace the value for `side`.
    pub fn set(&mut self, side: Side, value: f64) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }
}

fn parse_token(index: usize, token: &str) -> Result<f64, ShorthandError> {
    let number = token.strip_suffix("px").unwrap_or(token);
    let v: f64 = number
        .parse()
        .map_err(|_| ShorthandError::InvalidNumber { index })?;
    if !v.is_finite() {
        return Err(ShorthandError::InvalidNumber { index });
    }
    if v < 0.0 {
        return Err(ShorthandError::Negative { index });
    }
    Ok(v)
}

impl FromStr for Shorthand {
    type Err = ShorthandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = [0.0; 4];
        let mut count = 0;
        for (index, token) in s.split_ascii_whitespace().enumerate() {
            if index >= 4 {
                return Err(ShorthandError::TooManyValues(s.split_ascii_whitespace().count()));
            }
            parsed[index] = parse_token(index, token)?;
            count += 1;
        }
        let [a, b, c, d] = parsed;
        match count {
            0 => Err(ShorthandError::Empty),
            1 => Ok(Self::uniform(a)),
            2 => Ok(Self::new(a, b, a, b)),
            3 => Ok(Self::new(a, b, c, b)),
            _ => Ok(Self::new(a, b, c, d)),
        }
    }
}

impl fmt::Display for Shorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn expands_css_value_counts() {
        assert_eq!("5".parse(), Ok(Shorthand::uniform(5.0)));
        assert_eq!("1 2".parse(), Ok(Shorthand::new(1.0, 2.0, 1.0, 2.0)));
        assert_eq!("1 2 3".parse(), Ok(Shorthand::new(1.0, 2.0, 3.0, 2.0)));
        assert_eq!("1 2 3 4".parse(), Ok(Shorthand::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn accepts_px_units_and_extra_whitespace() {
        assert_eq!(
            "  10px 0 2.5px\t7 ".parse(),
            Ok(Shorthand::new(10.0, 0.0, 2.5, 7.0))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Shorthand>(), Err(ShorthandError::Empty));
        assert_eq!(
            "1 2 3 4 5".parse::<Shorthand>(),
            Err(ShorthandError::TooManyValues(5))
        );
        assert_eq!(
            "1 auto".parse::<Shorthand>(),
            Err(ShorthandError::InvalidNumber { index: 1 })
        );
        assert_eq!(
            "1 2 -3".parse::<Shorthand>(),
            Err(ShorthandError::Negative { index: 2 })
        );
        assert_eq!(
            "inf".parse::<Shorthand>(),
            Err(ShorthandError::InvalidNumber { index: 0 })
        );
    }

    #[test]
    fn formats_four_values() {
        assert_eq!(Shorthand::new(10.0, 0.0, 2.5, 7.0).to_string(), "10 0 2.5 7");
        let back: Shorthand = "10 0 2.5 7".parse().unwrap();
        assert_eq!(back, Shorthand::new(10.0, 0.0, 2.5, 7.0));
    }

    #[test]
    fn set_replaces_one_side() {
        let mut s = Shorthand::uniform(1.0);
        s.set(Side::Left, 4.0);
        assert_eq!(s.get(Side::Left), 4.0);
        assert_eq!(s.get(Side::Right), 1.0);
    }
}
