//! Luhn checksum
//!
//! Structural validity check for card numbers. This never contacts an issuer;
//! it only catches typos such as single-digit errors and most transpositions.

/// Shortest number accepted by the checksum prefilter
pub const MIN_CARD_LENGTH: usize = 13;

/// Longest number accepted by the checksum prefilter
pub const MAX_CARD_LENGTH: usize = 19;

/// Check a normalized card number against the Luhn algorithm.
///
/// Returns `false` when the length is outside 13..=19 or when any byte is not
/// an ASCII digit. Digits are scanned right to left and every second one is
/// doubled, subtracting 9 when the doubled value exceeds 9. The number passes
/// when the sum is a multiple of 10.
pub fn is_valid_luhn(number: &str) -> bool {
    if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&number.len()) {
        return false;
    }

    let mut sum: u32 = 0;
    let mut double = false;

    for byte in number.bytes().rev() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let mut digit = u32::from(byte - b'0');
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}
