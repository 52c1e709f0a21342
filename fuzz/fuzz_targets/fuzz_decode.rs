#![no_main]

use arbitrary::Arbitrary;
use caseprobe::{CaseMapper, DecodeError, DefaultCaseMapper, LocaleTag, Tokenizer, decode, dump};
use libfuzzer_sys::fuzz_target;

/// Raw units biased toward the escape alphabet so selectors and digit windows
/// are hit often.
#[derive(Debug, Arbitrary)]
enum Piece {
    Backslash,
    Selector(bool),
    HexDigit(u8),
    Unit(u16),
}

impl Piece {
    fn unit(&self) -> u16 {
        const HEX: &[u8; 22] = b"0123456789abcdefABCDEF";
        match *self {
            Piece::Backslash => u16::from(b'\\'),
            Piece::Selector(true) => u16::from(b'x'),
            Piece::Selector(false) => u16::from(b'u'),
            Piece::HexDigit(d) => u16::from(HEX[usize::from(d) % HEX.len()]),
            Piece::Unit(u) => u,
        }
    }
}

fuzz_target!(|pieces: Vec<Piece>| {
    let raw: Vec<u16> = pieces.iter().map(Piece::unit).collect();

    let consumed: usize = Tokenizer::new(&raw)
        .map_while(Result::ok)
        .map(|t| t.len())
        .sum();

    match decode(&raw) {
        Ok(units) => {
            assert_eq!(consumed, raw.len());
            assert_eq!(dump(&units).split(' ').filter(|l| !l.is_empty()).count(), units.len());

            let locale = LocaleTag::parse("en").unwrap();
            let _ = DefaultCaseMapper.to_upper(&units, &locale);
            let _ = DefaultCaseMapper.to_lower(&units, &locale);
        }
        Err(err) => match err {
            DecodeError::InvalidEscapeSelector { offset, .. } => assert_eq!(offset, consumed),
            DecodeError::TruncatedEscape {
                offset, available, ..
            } => {
                assert_eq!(offset, consumed);
                assert_eq!(offset + available, raw.len());
            }
            DecodeError::InvalidHexDigit { offset, .. } => {
                assert!((consumed + 2..consumed + 6).contains(&offset));
            }
        },
    }
});
