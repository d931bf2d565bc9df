//! Thai word tables.

/// Digit words indexed by value. Zero is never spoken inside a number.
pub const DIGITS: [&str; 10] = [
    "", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// Sub-million places above the tens, most significant first.
pub const PLACES: [(u64, &str); 4] = [
    (100_000, "แสน"),
    (10_000, "หมื่น"),
    (1_000, "พัน"),
    (100, "ร้อย"),
];

pub const MILLION: u64 = 1_000_000;

pub const ZERO: &str = "ศูนย์";
pub const MINUS: &str = "ลบ";
/// Trailing one after a higher digit.
pub const ET: &str = "เอ็ด";
/// Tens digit two.
pub const YI: &str = "ยี่";
pub const TEN: &str = "สิบ";
pub const MILLION_WORD: &str = "ล้าน";

pub const BAHT: &str = "บาท";
pub const SATANG: &str = "สตางค์";
/// No satang remainder.
pub const EVEN: &str = "ถ้วน";
