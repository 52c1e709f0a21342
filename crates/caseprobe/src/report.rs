use alloc::vec::Vec;
use core::fmt;

use crate::{
    case_map::CaseMapper,
    decoder::decode_str,
    dump::Dump,
    error::ProbeError,
    locale::LocaleTag,
};

/// Decoded input alongside its upper and lower case mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Locale the mappings were requested for.
    pub locale: LocaleTag,
    /// Decoded input code units.
    pub input: Vec<u16>,
    /// Uppercase mapping of `input`.
    pub upper: Vec<u16>,
    /// Lowercase mapping of `input`.
    pub lower: Vec<u16>,
}

impl CaseReport {
    /// Maps already decoded units with `mapper`.
    #[must_use]
    pub fn build<M: CaseMapper + ?Sized>(locale: LocaleTag, input: Vec<u16>, mapper: &M) -> Self {
        let upper = mapper.to_upper(&input, &locale);
        let lower = mapper.to_lower(&input, &locale);
        Self {
            locale,
            input,
            upper,
            lower,
        }
    }

    /// Labeled rows in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, Dump<'_>); 3] {
        [
            ("input", Dump(&self.input)),
            ("upper", Dump(&self.upper)),
            ("lower", Dump(&self.lower)),
        ]
    }
}

/// Parses `locale`, decodes `raw`, and maps the result with `mapper`.
///
/// ```rust
/// use caseprobe::{DefaultCaseMapper, probe};
///
/// let report = probe("en", r"a\u00df", &DefaultCaseMapper).unwrap();
/// assert_eq!(report.to_string(), "\
/// locale: en
/// input: U+0061 U+00df
/// upper: U+0041 U+0053 U+0053
/// lower: U+0061 U+00df
/// ");
/// ```
///
/// # Errors
///
/// Returns [`ProbeError::Locale`] for a malformed tag and
/// [`ProbeError::Decode`] for malformed escapes.
pub fn probe<M: CaseMapper + ?Sized>(
    locale: &str,
    raw: &str,
    mapper: &M,
) -> Result<CaseReport, ProbeError> {
    let locale = LocaleTag::parse(locale)?;
    let input = decode_str(raw)?;
    Ok(CaseReport::build(locale, input, mapper))
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "locale: {}", self.locale)?;
        for (label, dump) in self.rows() {
            writeln!(f, "{label}: {dump}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
struct Displayed<T>(T);

#[cfg(feature = "serde")]
impl<T: fmt::Display> serde::Serialize for Displayed<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Serializes as `{"locale", "input", "upper", "lower"}` with each sequence
/// rendered as its dump.
#[cfg(feature = "serde")]
impl serde::Serialize for CaseReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CaseReport", 4)?;
        state.serialize_field("locale", &Displayed(&self.locale))?;
        for (label, dump) in self.rows() {
            state.serialize_field(label, &Displayed(dump))?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{DecodeError, DefaultCaseMapper, LocaleError};

    #[test]
    fn locale_is_checked_before_input() {
        let err = probe("", r"\q", &DefaultCaseMapper).unwrap_err();
        assert_eq!(err, ProbeError::Locale(LocaleError::Empty));
    }

    #[test]
    fn decode_errors_propagate() {
        let err = probe("en", r"ok\x4", &DefaultCaseMapper).unwrap_err();
        assert_eq!(
            err,
            ProbeError::Decode(DecodeError::TruncatedEscape {
                offset: 2,
                expected: 4,
                available: 3,
            })
        );
    }

    #[test]
    fn empty_input_gives_empty_rows() {
        let report = probe("tr", "", &DefaultCaseMapper).unwrap();
        assert_eq!(report.to_string(), "locale: tr\ninput: \nupper: \nlower: \n");
    }

    #[test]
    fn mapper_can_be_a_trait_object() {
        let mapper: &dyn CaseMapper = &DefaultCaseMapper;
        let report = probe("en", "x", mapper).unwrap();
        assert_eq!(report.upper, [u16::from(b'X')]);
    }
}
