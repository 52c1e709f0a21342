use std::ffi::OsString;

use clap::{ArgAction, Parser, ValueEnum};

/// Decode an escaped string and show how case mapping treats each code unit.
///
/// INPUT may contain `\xHH`, `\uHHHH`, and `\\` escapes; every other
/// character is taken literally.
#[derive(Debug, Parser)]
#[command(name = "caseprobe", version, about)]
pub struct Cli {
    /// Locale tag, e.g. `tr-TR` or `en_US`
    pub locale: String,

    /// Escaped input text
    pub input: OsString,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (repeatable); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled lines
    Text,
    /// A single JSON object
    Json,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["caseprobe", "-vv", "--format", "json", "tr", "x"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level(), "trace");
        assert_eq!(cli.locale, "tr");
        assert_eq!(cli.input, "x");
    }

    #[test]
    fn requires_both_inputs() {
        assert!(Cli::try_parse_from(["caseprobe", "tr"]).is_err());
    }
}
