//! Core domain types for the converter.

use crate::Amount;
use crate::thai::convert_currency;

/// An amount together with its Thai baht text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub amount: Amount,
    pub text: String,
}

impl Conversion {
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            text: convert_currency(amount),
        }
    }
}

impl From<Amount> for Conversion {
    fn from(amount: Amount) -> Self {
        Self::new(amount)
    }
}
