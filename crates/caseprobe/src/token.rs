//! Tokenizer for the escape dialect.
//!
//! Each step looks at the unit under the cursor and either yields a literal or
//! slices a complete escape out of the remaining input. Slicing is checked, so
//! an escape that runs off the end of the input is reported as
//! [`DecodeError::TruncatedEscape`] instead of being read past.
//!
//! Invariants
//! - The cursor only moves forward, by exactly [`EscapeToken::len`] per token.
//! - After the first error the tokenizer is exhausted.

use crate::{
    error::DecodeError,
    hex::{parse_byte, parse_word},
};

const BACKSLASH: u16 = b'\\' as u16;
const SELECT_BYTE: u16 = b'x' as u16;
const SELECT_WORD: u16 = b'u' as u16;

/// One parsed unit of escaped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeToken {
    /// A non-backslash unit copied through as-is.
    Literal(u16),
    /// `\xHH`.
    ByteEscape(u8),
    /// `\uHHHH`.
    WordEscape(u16),
    /// `\\`.
    BackslashEscape,
}

impl EscapeToken {
    /// Number of input units this token consumed.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        match self {
            EscapeToken::Literal(_) => 1,
            EscapeToken::ByteEscape(_) => 4,
            EscapeToken::WordEscape(_) => 6,
            EscapeToken::BackslashEscape => 2,
        }
    }

    /// The single code unit this token decodes to.
    #[must_use]
    pub fn unit(self) -> u16 {
        match self {
            EscapeToken::Literal(u) | EscapeToken::WordEscape(u) => u,
            EscapeToken::ByteEscape(b) => u16::from(b),
            EscapeToken::BackslashEscape => BACKSLASH,
        }
    }
}

/// Iterator over the [`EscapeToken`]s of a raw input.
///
/// ```rust
/// use caseprobe::{EscapeToken, Tokenizer};
///
/// let raw: Vec<u16> = r"a\x41\\".encode_utf16().collect();
/// let tokens: Result<Vec<_>, _> = Tokenizer::new(&raw).collect();
/// assert_eq!(
///     tokens.unwrap(),
///     [
///         EscapeToken::Literal(u16::from(b'a')),
///         EscapeToken::ByteEscape(0x41),
///         EscapeToken::BackslashEscape,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    input: &'src [u16],
    pos: usize,
    failed: bool,
}

impl<'src> Tokenizer<'src> {
    /// Starts tokenizing `input` from its first unit.
    #[must_use]
    pub fn new(input: &'src [u16]) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Offset of the next unit to be read.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Slices the `N` units following the selector, or reports truncation of
    /// an escape whose full length is `N + 2`.
    fn window<const N: usize>(&self, rest: &'src [u16]) -> Result<&'src [u16; N], DecodeError> {
        rest.get(2..2 + N)
            .and_then(|w| w.try_into().ok())
            .ok_or(DecodeError::TruncatedEscape {
                offset: self.pos,
                expected: N + 2,
                available: rest.len(),
            })
    }

    fn next_token(&self, rest: &'src [u16]) -> Result<EscapeToken, DecodeError> {
        let first = rest[0];
        if first != BACKSLASH {
            return Ok(EscapeToken::Literal(first));
        }
        let Some(&selector) = rest.get(1) else {
            return Err(DecodeError::TruncatedEscape {
                offset: self.pos,
                expected: 2,
                available: rest.len(),
            });
        };
        let digits_at = self.pos + 2;
        match selector {
            SELECT_BYTE => parse_byte(self.window::<2>(rest)?, digits_at).map(EscapeToken::ByteEscape),
            SELECT_WORD => parse_word(self.window::<4>(rest)?, digits_at).map(EscapeToken::WordEscape),
            BACKSLASH => Ok(EscapeToken::BackslashEscape),
            _ => Err(DecodeError::InvalidEscapeSelector {
                offset: self.pos,
                selector,
            }),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<EscapeToken, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let rest = self.input.get(self.pos..).filter(|r| !r.is_empty())?;
        match self.next_token(rest) {
            Ok(token) => {
                self.pos += token.len();
                Some(Ok(token))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // an error can end the stream after a single item
        let remaining = self.input.len().saturating_sub(self.pos);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl core::iter::FusedIterator for Tokenizer<'_> {}
