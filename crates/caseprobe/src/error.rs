use alloc::string::String;

use thiserror::Error;

use crate::dump::CodeUnitLabel;

/// Failure to decode an escaped input. Offsets count UTF-16 code units from
/// the start of the raw input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A backslash was followed by something other than `x`, `u`, or `\`.
    #[error("invalid escape selector {} at offset {offset}", CodeUnitLabel(*.selector))]
    InvalidEscapeSelector {
        /// Offset of the backslash that starts the escape.
        offset: usize,
        /// The unit that followed the backslash.
        selector: u16,
    },
    /// The input ended before the escape was complete.
    #[error(
        "truncated escape at offset {offset}: expected {expected} code units, found {available}"
    )]
    TruncatedEscape {
        /// Offset of the backslash that starts the escape.
        offset: usize,
        /// Length of the complete escape token.
        expected: usize,
        /// Units remaining in the input from `offset`.
        available: usize,
    },
    /// A unit inside a `\x` or `\u` digit window is not an ASCII hex digit.
    #[error("invalid hex digit {} at offset {offset}", CodeUnitLabel(*.unit))]
    InvalidHexDigit {
        /// Offset of the offending unit.
        offset: usize,
        /// The offending unit.
        unit: u16,
    },
}

impl DecodeError {
    /// Offset of the position the error was detected at.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::InvalidEscapeSelector { offset, .. }
            | DecodeError::TruncatedEscape { offset, .. }
            | DecodeError::InvalidHexDigit { offset, .. } => offset,
        }
    }
}

/// Failure to parse a locale tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag was empty or consisted only of separators.
    #[error("empty locale tag")]
    Empty,
    /// The first subtag is not a language code.
    #[error("invalid language subtag '{subtag}'")]
    InvalidLanguage {
        /// The rejected subtag, as written.
        subtag: String,
    },
    /// A subtag after the language fits none of the expected shapes.
    #[error("invalid subtag '{subtag}' at position {position}")]
    InvalidSubtag {
        /// The rejected subtag, as written.
        subtag: String,
        /// Zero-based index of the subtag within the tag.
        position: usize,
    },
    /// An extension singleton was the last subtag.
    #[error("extension '{singleton}' has no subtags")]
    EmptyExtension {
        /// The singleton that opened the extension.
        singleton: char,
    },
}

/// Anything that can go wrong while producing a [`crate::CaseReport`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The locale tag could not be parsed.
    #[error("locale error: {0}")]
    Locale(#[from] LocaleError),
    /// The escaped input could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
