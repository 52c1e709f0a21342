//! The seam to case mapping.
//!
//! Case mapping is not implemented here. [`DefaultCaseMapper`] hands
//! well-formed runs of text to the standard library's full Unicode mappings,
//! which include context rules such as final sigma but no locale tailoring.
//! Callers that need tailored behavior supply their own [`CaseMapper`].

use alloc::{string::String, vec::Vec};

use crate::locale::LocaleTag;

/// Maps decoded code units to upper and lower case for a locale.
pub trait CaseMapper {
    /// Returns the uppercase mapping of `units`.
    fn to_upper(&self, units: &[u16], locale: &LocaleTag) -> Vec<u16>;

    /// Returns the lowercase mapping of `units`.
    fn to_lower(&self, units: &[u16], locale: &LocaleTag) -> Vec<u16>;
}

/// Locale-independent default Unicode case mapping.
///
/// Unpaired surrogates are copied through unchanged and split the input into
/// separately mapped runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCaseMapper;

impl DefaultCaseMapper {
    fn map_runs(units: &[u16], map: fn(&str) -> String) -> Vec<u16> {
        let mut out = Vec::with_capacity(units.len());
        let mut run = String::new();
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => run.push(ch),
                Err(err) => {
                    out.extend(map(&run).encode_utf16());
                    run.clear();
                    out.push(err.unpaired_surrogate());
                }
            }
        }
        out.extend(map(&run).encode_utf16());
        out
    }
}

impl CaseMapper for DefaultCaseMapper {
    fn to_upper(&self, units: &[u16], locale: &LocaleTag) -> Vec<u16> {
        tracing::debug!(%locale, len = units.len(), "mapping to upper case");
        Self::map_runs(units, str::to_uppercase)
    }

    fn to_lower(&self, units: &[u16], locale: &LocaleTag) -> Vec<u16> {
        tracing::debug!(%locale, len = units.len(), "mapping to lower case");
        Self::map_runs(units, str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use rstest::rstest;

    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn locale() -> LocaleTag {
        LocaleTag::parse("en-US").unwrap()
    }

    #[rstest]
    #[case("abc", "ABC", "abc")]
    #[case("İ", "İ", "i\u{307}")]
    #[case("ß", "SS", "ß")]
    // final sigma is context sensitive
    #[case("\u{39F}\u{394}\u{39F}\u{3A3}", "\u{39F}\u{394}\u{39F}\u{3A3}", "\u{3BF}\u{3B4}\u{3BF}\u{3C2}")]
    #[case("\u{1F600}", "\u{1F600}", "\u{1F600}")]
    fn maps_well_formed_text(#[case] input: &str, #[case] upper: &str, #[case] lower: &str) {
        let mapper = DefaultCaseMapper;
        assert_eq!(mapper.to_upper(&utf16(input), &locale()), utf16(upper));
        assert_eq!(mapper.to_lower(&utf16(input), &locale()), utf16(lower));
    }

    #[test]
    fn unpaired_surrogates_pass_through() {
        let input = [u16::from(b'a'), 0xD800, u16::from(b'b'), 0xDC00];
        let upper = DefaultCaseMapper.to_upper(&input, &locale());
        assert_eq!(upper, [u16::from(b'A'), 0xD800, u16::from(b'B'), 0xDC00]);
    }

    #[test]
    fn locale_does_not_tailor() {
        let tr = LocaleTag::parse("tr-TR").unwrap();
        assert_eq!(
            DefaultCaseMapper.to_upper(&utf16("i"), &tr),
            DefaultCaseMapper.to_upper(&utf16("i"), &locale())
        );
    }
}
