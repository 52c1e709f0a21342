//! Locale tags: a pragmatic subset of BCP 47.
//!
//! Both `-` and `_` are accepted as separators so POSIX-style names such as
//! `tr_TR` resolve to the same tag as `tr-TR`. Parsed tags are canonicalized:
//! language and variants in lower case, script in title case, region in upper
//! case. Anything after an extension singleton is kept verbatim (lowercased)
//! and not interpreted further.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, str::FromStr};

use crate::error::LocaleError;

/// A parsed and canonicalized locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
    extensions: Vec<String>,
}

fn is_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_alnum(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_digit(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn is_language(s: &str) -> bool {
    matches!(s.len(), 2..=3 | 5..=8) && is_alpha(s)
}

fn is_script(s: &str) -> bool {
    s.len() == 4 && is_alpha(s)
}

fn is_region(s: &str) -> bool {
    (s.len() == 2 && is_alpha(s)) || (s.len() == 3 && is_digit(s))
}

fn is_variant(s: &str) -> bool {
    match s.len() {
        5..=8 => is_alnum(s),
        4 => s.as_bytes()[0].is_ascii_digit() && is_alnum(s),
        _ => false,
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, ch) in s.chars().enumerate() {
        out.push(if i == 0 {
            ch.to_ascii_uppercase()
        } else {
            ch.to_ascii_lowercase()
        });
    }
    out
}

impl LocaleTag {
    /// Parses a tag such as `en`, `tr-TR`, `sr_Latn_RS`, or `de-DE-u-co-phonebk`.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError`] naming the first subtag that does not fit.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let subtags: Vec<&str> = tag.split(['-', '_']).collect();
        if subtags.iter().all(|s| s.is_empty()) {
            return Err(LocaleError::Empty);
        }

        let mut rest = subtags.iter().copied().enumerate().peekable();
        let (_, language) = rest.next().ok_or(LocaleError::Empty)?;
        if !is_language(language) {
            return Err(LocaleError::InvalidLanguage {
                subtag: language.to_string(),
            });
        }

        let mut parsed = LocaleTag {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
            variants: Vec::new(),
            extensions: Vec::new(),
        };

        if let Some((_, s)) = rest.next_if(|&(_, s)| is_script(s)) {
            parsed.script = Some(title_case(s));
        }
        if let Some((_, s)) = rest.next_if(|&(_, s)| is_region(s)) {
            parsed.region = Some(s.to_ascii_uppercase());
        }
        while let Some((_, s)) = rest.next_if(|&(_, s)| is_variant(s)) {
            parsed.variants.push(s.to_ascii_lowercase());
        }

        if let Some((position, singleton)) = rest.next() {
            let mut chars = singleton.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(LocaleError::InvalidSubtag {
                    subtag: singleton.to_string(),
                    position,
                });
            };
            if !ch.is_ascii_alphanumeric() {
                return Err(LocaleError::InvalidSubtag {
                    subtag: singleton.to_string(),
                    position,
                });
            }
            parsed.extensions.push(singleton.to_ascii_lowercase());
            let mut any = false;
            for (position, s) in rest {
                if s.is_empty() || s.len() > 8 || !is_alnum(s) {
                    return Err(LocaleError::InvalidSubtag {
                        subtag: s.to_string(),
                        position,
                    });
                }
                parsed.extensions.push(s.to_ascii_lowercase());
                any = true;
            }
            if !any {
                return Err(LocaleError::EmptyExtension {
                    singleton: ch.to_ascii_lowercase(),
                });
            }
        }

        tracing::debug!(%parsed, input = tag, "resolved locale tag");
        Ok(parsed)
    }

    /// The language subtag, e.g. `tr`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The script subtag, e.g. `Latn`.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// The region subtag, e.g. `TR` or `419`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Variant subtags in order.
    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// The extension tail, singleton included, in order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        let tail = self
            .script
            .iter()
            .chain(&self.region)
            .chain(&self.variants)
            .chain(&self.extensions);
        for subtag in tail {
            write!(f, "-{subtag}")?;
        }
        Ok(())
    }
}
