//! Phone input formatting for the `+7 (XXX) XXX-XX-XX` numbering plan.

use crate::config;

const COUNTRY_CODE: char = '7';
const NATIONAL_LEN: usize = 10;

/// Reformats whatever the user typed into the display mask.
///
/// Digits are kept, everything else is dropped. A leading `7` or `8` is read
/// as the country code. The result is always a prefix of the full mask, so
/// partial input renders as a partially filled mask.
pub fn format_phone(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    let Some(&first) = digits.first() else {
        return String::new();
    };

    let national: Vec<char> = if first == '7' || first == '8' {
        digits[1..].iter().copied().take(NATIONAL_LEN).collect()
    } else {
        digits.iter().copied().take(NATIONAL_LEN).collect()
    };

    let mut out = String::with_capacity(18);
    out.push('+');
    out.push(COUNTRY_CODE);
    for (i, digit) in national.iter().enumerate() {
        match i {
            0 => out.push_str(" ("),
            3 => out.push_str(") "),
            6 | 8 => out.push('-'),
            _ => {}
        }
        out.push(*digit);
    }
    out
}

/// Digits of the formatted number, country code included.
pub fn normalized_digits(input: &str) -> String {
    format_phone(input)
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

pub fn is_complete(input: &str) -> bool {
    normalized_digits(input).len() >= config::PHONE_MIN_DIGITS
}
