use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Darwin kernel major versions for the macOS releases the catalog knows about.
pub mod darwin {
    pub const EL_CAPITAN: u32 = 15;
    pub const SIERRA: u32 = 16;
    pub const HIGH_SIERRA: u32 = 17;
    pub const MOJAVE: u32 = 18;
    pub const CATALINA: u32 = 19;
    pub const BIG_SUR: u32 = 20;
    pub const MONTEREY: u32 = 21;
    pub const VENTURA: u32 = 22;
    pub const SONOMA: u32 = 23;
    pub const SEQUOIA: u32 = 24;
    /// Open upper bound used by catalog windows.
    pub const MAX_OS: u32 = 99;
}

/// A host OS version as Darwin kernel `(major, minor)`.
///
/// Ordering is lexicographic on the pair, so `22.10` sorts after `22.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Marketing name of the release, if known.
    pub fn release_name(&self) -> Option<&'static str> {
        let name = match self.major {
            darwin::EL_CAPITAN => "El Capitan",
            darwin::SIERRA => "Sierra",
            darwin::HIGH_SIERRA => "High Sierra",
            darwin::MOJAVE => "Mojave",
            darwin::CATALINA => "Catalina",
            darwin::BIG_SUR => "Big Sur",
            darwin::MONTEREY => "Monterey",
            darwin::VENTURA => "Ventura",
            darwin::SONOMA => "Sonoma",
            darwin::SEQUOIA => "Sequoia",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for OsVersion {
    type Err = Error;

    /// Parse `"22"` or `"22.4"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |detail: &str| Error::InvalidOsVersion {
            input: s.to_string(),
            detail: detail.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty version"));
        }

        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, "0"),
        };

        let major: u32 = major
            .parse()
            .map_err(|_| invalid("major version must be a non-negative integer"))?;
        let minor: u32 = minor
            .parse()
            .map_err(|_| invalid("minor version must be a non-negative integer"))?;

        Ok(Self { major, minor })
    }
}

/// Inclusive OS eligibility window of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsWindow {
    pub minimum: OsVersion,
    pub maximum: OsVersion,
}

impl OsWindow {
    pub const fn new(minimum: OsVersion, maximum: OsVersion) -> Self {
        Self { minimum, maximum }
    }

    /// Window starting at `major.0` with no upper bound.
    pub const fn from_major(major: u32) -> Self {
        Self::new(OsVersion::new(major, 0), OsVersion::new(darwin::MAX_OS, 99))
    }

    /// Window covering `min_major.0` through `max_major.99`.
    pub const fn majors(min_major: u32, max_major: u32) -> Self {
        Self::new(OsVersion::new(min_major, 0), OsVersion::new(max_major, 99))
    }

    pub fn contains(&self, host: OsVersion) -> bool {
        self.minimum <= host && host <= self.maximum
    }
}

impl fmt::Display for OsWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.maximum.major >= darwin::MAX_OS {
            write!(f, "{}+", self.minimum)
        } else {
            write!(f, "{} - {}", self.minimum, self.maximum)
        }
    }
}
