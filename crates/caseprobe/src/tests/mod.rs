
use alloc::vec::Vec;

/// UTF-16 encoding of `s`, for comparing decoder output against text.
pub(crate) fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
