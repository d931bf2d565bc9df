use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building an [`Amount`].
#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal amount")]
    Invalid(String),

    #[error("'{0}' does not fit a 64-bit baht value")]
    OutOfRange(String),

    #[error("{0} is not a finite amount")]
    NonFinite(f64),
}

/// Fixed-point decimal with 2 decimal places (satang), stored as a scaled integer.
///
/// The whole baht part always fits an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(i128);

impl Amount {
    const SCALE: i128 = 100;

    pub fn from_baht(baht: i64) -> Self {
        Amount(baht as i128 * Self::SCALE)
    }

    pub fn from_satang(satang: i64) -> Self {
        Amount(satang as i128)
    }

    /// Convert a float through its shortest decimal representation, so that
    /// `33333.75` is exactly 33333 baht and 75 satang.
    pub fn from_float(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NonFinite(value));
        }
        value.to_string().parse()
    }

    /// Whole baht, truncated toward zero.
    pub fn baht(&self) -> i64 {
        (self.0 / Self::SCALE) as i64
    }

    /// Satang remainder, carrying the sign of the amount (-99..=99).
    pub fn satang(&self) -> i64 {
        (self.0 % Self::SCALE) as i64
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parse `[+-]digits[.digits]`. Digits past the second fractional place
    /// are truncated, not rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(AmountError::Empty);
        }

        let (negative, unsigned) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(AmountError::Invalid(input.to_string()));
        }

        let baht = whole
            .bytes()
            .try_fold(0i128, |acc, b| {
                acc.checked_mul(10)?.checked_add(i128::from(b - b'0'))
            })
            .filter(|baht| *baht <= i64::MAX as i128 + i128::from(negative))
            .ok_or_else(|| AmountError::OutOfRange(input.to_string()))?;

        let satang = frac
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0i128, |acc, b| acc * 10 + i128::from(b - b'0'));

        let scaled = baht * Self::SCALE + satang;
        Ok(Amount(if negative { -scaled } else { scaled }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / Self::SCALE as u128;
        let frac = abs % Self::SCALE as u128;
        match frac {
            0 => write!(f, "{sign}{whole}"),
            _ if frac % 10 == 0 => write!(f, "{sign}{whole}.{}", frac / 10),
            _ => write!(f, "{sign}{whole}.{frac:02}"),
        }
    }
}
