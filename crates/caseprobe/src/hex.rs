//! Fixed-width hexadecimal digit windows for `\x` and `\u` escapes.
//!
//! Callers slice the window out of the input with checked indexing first, so
//! every function here sees exactly the digits it needs and only has to
//! validate them.

use crate::error::DecodeError;

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
pub(crate) fn hex_val(unit: u16) -> Option<u8> {
    let byte = u8::try_from(unit).ok()?;
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Validates a window of `N` digits starting at input offset `start`.
fn digits<const N: usize>(window: &[u16; N], start: usize) -> Result<[u8; N], DecodeError> {
    let mut out = [0u8; N];
    for (i, (&unit, slot)) in window.iter().zip(out.iter_mut()).enumerate() {
        *slot = hex_val(unit).ok_or(DecodeError::InvalidHexDigit {
            offset: start + i,
            unit,
        })?;
    }
    Ok(out)
}

/// Parses the two digits of a `\xHH` escape.
pub(crate) fn parse_byte(window: &[u16; 2], start: usize) -> Result<u8, DecodeError> {
    let [hi, lo] = digits(window, start)?;
    Ok((hi << 4) | lo)
}

/// Parses the four digits of a `\uHHHH` escape.
pub(crate) fn parse_word(window: &[u16; 4], start: usize) -> Result<u16, DecodeError> {
    let parsed = digits(window, start)?;
    Ok(parsed
        .iter()
        .fold(0u16, |acc, &d| (acc << 4) | u16::from(d)))
}
