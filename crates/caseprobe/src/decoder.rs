use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{error::DecodeError, token::Tokenizer};

/// Decodes an escaped sequence of UTF-16 code units.
///
/// Every token collapses to exactly one output unit. Decoding stops at the
/// first malformed escape and no partial output is returned.
///
/// # Errors
///
/// Returns the [`DecodeError`] of the first malformed escape.
pub fn decode(raw: &[u16]) -> Result<Vec<u16>, DecodeError> {
    let mut out = Vec::with_capacity(raw.len());
    for token in Tokenizer::new(raw) {
        match token {
            Ok(token) => out.push(token.unit()),
            Err(err) => {
                tracing::debug!(%err, input_len = raw.len(), "escape decoding failed");
                return Err(err);
            }
        }
    }
    tracing::trace!(input_len = raw.len(), output_len = out.len(), "decoded escaped input");
    Ok(out)
}

/// Decodes the UTF-16 encoding of `raw`.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_str(raw: &str) -> Result<Vec<u16>, DecodeError> {
    let units: Vec<u16> = raw.encode_utf16().collect();
    decode(&units)
}

/// Decodes raw bytes that are expected, but not guaranteed, to be UTF-8.
///
/// Invalid UTF-8 sequences become U+FFFD before escapes are decoded, so error
/// offsets refer to the repaired text.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_bytes(raw: &[u8]) -> Result<Vec<u16>, DecodeError> {
    let mut units = Vec::with_capacity(raw.len());
    let mut buf = [0u16; 2];
    for ch in raw.chars() {
        units.extend_from_slice(ch.encode_utf16(&mut buf));
    }
    decode(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_is_replaced_before_decoding() {
        let out = decode_bytes(b"a\xff\\x41").unwrap();
        assert_eq!(out, [u16::from(b'a'), 0xFFFD, 0x41]);
    }

    #[test]
    fn bytes_and_str_agree_on_utf8() {
        let s = r"\u0130\u0131\\";
        assert_eq!(decode_bytes(s.as_bytes()), decode_str(s));
    }

    #[test]
    fn error_offsets_are_in_code_units() {
        // U+1F600 occupies two code units
        let err = decode_str("\u{1F600}\\q").unwrap_err();
        assert_eq!(err.offset(), 2);
    }
}
