//! Thai currency text.
//!
//! Numbers are peeled by place value: millions first (recursively, so very
//! large counts repeat ล้าน), then the sub-million places, then a dedicated
//! tens-and-ones step. Whether a higher fragment has already been written is
//! passed down explicitly, since it decides between หนึ่ง and เอ็ด.

use crate::Amount;

mod words;
use words::{
    BAHT, DIGITS, ET, EVEN, MILLION, MILLION_WORD, MINUS, PLACES, SATANG, TEN, YI, ZERO,
};

/// Convert an amount to Thai baht text, e.g. `1234` to
/// `หนึ่งพันสองร้อยสามสิบสี่บาทถ้วน`.
///
/// Satang is converted as a number of its own: the baht digits do not affect it.
pub fn convert_currency(amount: Amount) -> String {
    let mut text = convert_integer(amount.baht());
    text.push_str(BAHT);

    match amount.satang() {
        0 => text.push_str(EVEN),
        satang => {
            text.push_str(&convert_integer(satang));
            text.push_str(SATANG);
        }
    }

    text
}

/// Convert an integer to Thai number words.
pub fn convert_integer(n: i64) -> String {
    match n {
        0 => ZERO.to_string(),
        n if n < 0 => format!("{MINUS}{}", convert_positive(n.unsigned_abs())),
        n => convert_positive(n as u64),
    }
}

fn convert_positive(n: u64) -> String {
    if n < MILLION {
        return sub_million(n, false);
    }

    let mut text = convert_positive(n / MILLION);
    text.push_str(MILLION_WORD);
    text.push_str(&sub_million(n % MILLION, true));
    text
}

/// Words for `n` below one million. `has_higher_digits` is set when a
/// fragment was already written before this one.
fn sub_million(mut n: u64, mut has_higher_digits: bool) -> String {
    let mut text = String::new();

    for (weight, name) in PLACES {
        let digit = n / weight;
        if digit > 0 {
            text.push_str(DIGITS[digit as usize]);
            text.push_str(name);
            n %= weight;
            has_higher_digits = true;
        }
    }

    text.push_str(&tens_and_ones(n, has_higher_digits));
    text
}

/// Words for `n` in 0..100.
fn tens_and_ones(n: u64, has_higher_digits: bool) -> String {
    let (tens, ones) = ((n / 10) as usize, (n % 10) as usize);
    let mut text = String::new();

    match tens {
        0 => {}
        1 => text.push_str(TEN),
        2 => {
            text.push_str(YI);
            text.push_str(TEN);
        }
        _ => {
            text.push_str(DIGITS[tens]);
            text.push_str(TEN);
        }
    }

    match ones {
        0 => {}
        1 if tens > 0 || has_higher_digits => text.push_str(ET),
        _ => text.push_str(DIGITS[ones]),
    }

    text
}
