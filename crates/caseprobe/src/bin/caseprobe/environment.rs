use std::fmt;

use serde::Serialize;

/// Platform fields printed ahead of the report.
#[derive(Debug, Clone, Serialize)]
pub struct Environment {
    #[serde(rename = "os.name")]
    pub os_name: &'static str,
    #[serde(rename = "os.family")]
    pub os_family: &'static str,
    #[serde(rename = "os.arch")]
    pub os_arch: &'static str,
    #[serde(rename = "caseprobe.version")]
    pub version: &'static str,
}

impl Environment {
    pub fn current() -> Self {
        Self {
            os_name: std::env::consts::OS,
            os_family: std::env::consts::FAMILY,
            os_arch: std::env::consts::ARCH,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "os.name: {}", self.os_name)?;
        writeln!(f, "os.family: {}", self.os_family)?;
        writeln!(f, "os.arch: {}", self.os_arch)?;
        writeln!(f, "caseprobe.version: {}", self.version)
    }
}
