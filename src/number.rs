//! Arbitrary-precision numbers.
//!
//! Property values are inferred as [`Number::Integer`] (a [`BigInt`]) or
//! [`Number::Decimal`] (a [`Decimal`]). Neither overflows: a literal that is
//! not an integer falls through to decimal parsing, and one that is neither
//! stays a string.
//!
//! ```rust
//! use serde_props::{Decimal, Number};
//!
//! let pi: Decimal = "3.14".parse().unwrap();
//! assert_eq!(pi.scale(), 2);
//! assert_eq!(pi.to_string(), "3.14");
//!
//! let big = Number::parse_integer("123456789012345678901234567890").unwrap();
//! assert_eq!(big.as_i64(), None);
//! ```

use num_bigint::{BigInt, Sign};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A numeric property value.
///
/// # Examples
///
/// ```rust
/// use serde_props::Number;
///
/// let n = Number::from(42);
/// assert!(n.is_integer());
/// assert_eq!(n.as_i64(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Number {
    Integer(BigInt),
    Decimal(Decimal),
}

impl Number {
    /// Parses an integer literal: an optional `+`/`-` followed by ASCII digits only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::Number;
    ///
    /// assert_eq!(Number::parse_integer("+17"), Some(Number::from(17)));
    /// assert_eq!(Number::parse_integer("1_000"), None);
    /// assert_eq!(Number::parse_integer("1.0"), None);
    /// ```
    #[must_use]
    pub fn parse_integer(raw: &str) -> Option<Number> {
        let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude = BigInt::from_str(digits).ok()?;
        Some(Number::Integer(if raw.starts_with('-') {
            -magnitude
        } else {
            magnitude
        }))
    }

    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a decimal value.
    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Number::Decimal(_))
    }

    /// Returns the integer if it fits in an `i64`. Decimals always return `None`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => i64::try_from(i).ok(),
            Number::Decimal(_) => None,
        }
    }

    /// Returns the integer if it fits in a `u64`. Decimals always return `None`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::Integer(i) => u64::try_from(i).ok(),
            Number::Decimal(_) => None,
        }
    }

    /// Converts this number to the nearest `f64`. Precision may be lost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::Number;
    ///
    /// let n: Number = "2.5".parse::<serde_props::Decimal>().unwrap().into();
    /// assert_eq!(n.as_f64(), 2.5);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => i.to_string().parse().unwrap_or(f64::NAN),
            Number::Decimal(d) => d.to_f64(),
        }
    }

    /// If this is an integer, returns a reference to it.
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Number::Integer(i) => Some(i),
            Number::Decimal(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(i) = self.as_i64() {
            return serializer.serialize_i64(i);
        }
        if let Some(u) = self.as_u64() {
            return serializer.serialize_u64(u);
        }
        // Exact text; serde_json keeps it verbatim under `arbitrary_precision`.
        let exact = serde_json::Number::from_str(&self.to_string())
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        exact.serialize(serializer)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(BigInt::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(BigInt::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(BigInt::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Integer(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

/// Error returned when a string is not a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal: {0:?}")]
pub struct ParseDecimalError(String);

/// An arbitrary-precision decimal: `unscaled × 10^-scale`.
///
/// Two decimals are equal only when both the unscaled value and the scale
/// match, so `1.5` and `1.50` are distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    /// Builds `unscaled × 10^-scale`.
    ///
    /// Returns `None` when `scale` does not fit in 32 bits, the same bound
    /// parsing enforces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::Decimal;
    ///
    /// let d = Decimal::new(314.into(), 2).unwrap();
    /// assert_eq!(d.to_string(), "3.14");
    /// assert!(Decimal::new(1.into(), i64::MIN).is_none());
    /// ```
    #[must_use]
    pub fn new(unscaled: BigInt, scale: i64) -> Option<Self> {
        i32::try_from(scale).ok()?;
        Some(Decimal { unscaled, scale })
    }

    /// The digits without the decimal point, signed.
    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Digits to the right of the decimal point; negative for `1E+3` forms.
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Converts to the nearest `f64`, which may be infinite for huge exponents.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalError(s.to_string());

        let negative = s.starts_with('-');
        let body = s.strip_prefix(['+', '-']).unwrap_or(s);
        let (significand, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&body[..at], Some(&body[at + 1..])),
            None => (body, None),
        };
        let (int_part, frac_part) = significand.split_once('.').unwrap_or((significand, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let exponent: i64 = match exponent {
            Some(exp) => {
                let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
                if digits.is_empty() || !all_digits(digits) {
                    return Err(invalid());
                }
                exp.parse().map_err(|_| invalid())?
            }
            None => 0,
        };

        let scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .filter(|scale| i32::try_from(*scale).is_ok())
            .ok_or_else(invalid)?;

        let magnitude =
            BigInt::from_str(&format!("{}{}", int_part, frac_part)).map_err(|_| invalid())?;
        let unscaled = if negative { -magnitude } else { magnitude };
        Ok(Decimal { unscaled, scale })
    }
}

impl fmt::Display for Decimal {
    /// Plain notation when `scale >= 0` and the adjusted exponent is at least
    /// -6, scientific notation otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_string();
        if self.unscaled.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        let adjusted = digits.len() as i64 - 1 - self.scale;

        if self.scale == 0 {
            return f.write_str(&digits);
        }
        if self.scale > 0 && adjusted >= -6 {
            let scale = self.scale as usize;
            return if digits.len() > scale {
                let (int_part, frac_part) = digits.split_at(digits.len() - scale);
                write!(f, "{}.{}", int_part, frac_part)
            } else {
                write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
            };
        }

        let (head, tail) = digits.split_at(1);
        f.write_str(head)?;
        if !tail.is_empty() {
            write!(f, ".{}", tail)?;
        }
        if adjusted >= 0 {
            write!(f, "E+{}", adjusted)
        } else {
            write!(f, "E{}", adjusted)
        }
    }
}
