//! Rendering of code-unit sequences as `U+xxxx` labels.

use alloc::string::{String, ToString};
use core::fmt;

/// Displays one code unit as `U+` followed by four lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeUnitLabel(pub u16);

impl fmt::Display for CodeUnitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04x}", self.0)
    }
}

/// Displays a code-unit sequence as space-separated [`CodeUnitLabel`]s
/// without allocating.
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a>(pub &'a [u16]);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut units = self.0.iter();
        if let Some(&first) = units.next() {
            write!(f, "{}", CodeUnitLabel(first))?;
            for &unit in units {
                write!(f, " {}", CodeUnitLabel(unit))?;
            }
        }
        Ok(())
    }
}

/// Renders `units` as space-separated `U+xxxx` labels.
///
/// ```rust
/// assert_eq!(caseprobe::dump(&[0x41, 0x42]), "U+0041 U+0042");
/// assert_eq!(caseprobe::dump(&[]), "");
/// ```
#[must_use]
pub fn dump(units: &[u16]) -> String {
    Dump(units).to_string()
}

/// Renders `units` as text, replacing unpaired surrogates with U+FFFD.
#[must_use]
pub fn to_string_lossy(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty(&[], "")]
    #[case::single(&[0x41], "U+0041")]
    #[case::pair(&[0x41, 0x42], "U+0041 U+0042")]
    #[case::lowercase_hex(&[0x00e9, 0xABCD], "U+00e9 U+abcd")]
    #[case::extremes(&[0x0000, 0xFFFF], "U+0000 U+ffff")]
    #[case::lone_surrogate(&[0xD800], "U+d800")]
    fn dumps(#[case] units: &[u16], #[case] expected: &str) {
        assert_eq!(dump(units), expected);
    }

    #[test]
    fn one_label_per_unit() {
        let units: std::vec::Vec<u16> = (0..=300).collect();
        let out = dump(&units);
        assert_eq!(out.split(' ').count(), units.len());
        assert!(out.split(' ').all(|label| label.len() == 6 && label.starts_with("U+")));
    }

    #[test]
    fn lossy_text() {
        assert_eq!(to_string_lossy(&[0x48, 0x69]), "Hi");
        assert_eq!(to_string_lossy(&[0xD83D, 0xDE00]), "\u{1F600}");
        assert_eq!(to_string_lossy(&[0x61, 0xDC00]), "a\u{FFFD}");
    }
}
