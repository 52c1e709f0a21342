//! Decoder and dumper for backslash-escaped UTF-16 text.
//!
//! The input grammar is deliberately tiny: any code unit other than `\` is a
//! literal, and a backslash introduces one of `\xHH`, `\uHHHH`, or `\\`. The
//! decoded code units can then be handed to a [`CaseMapper`] and every stage
//! rendered with [`dump`].
//!
//! ```rust
//! use caseprobe::{decode_str, dump};
//!
//! let units = decode_str(r"I\u0130\x69").unwrap();
//! assert_eq!(dump(&units), "U+0049 U+0130 U+0069");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod case_map;
mod decoder;
mod dump;
mod error;
mod hex;
mod locale;
mod report;
mod token;

#[cfg(test)]
mod tests;

pub use case_map::{CaseMapper, DefaultCaseMapper};
pub use decoder::{decode, decode_bytes, decode_str};
pub use dump::{CodeUnitLabel, Dump, dump, to_string_lossy};
pub use error::{DecodeError, LocaleError, ProbeError};
pub use locale::LocaleTag;
pub use report::{CaseReport, probe};
pub use token::{EscapeToken, Tokenizer};
