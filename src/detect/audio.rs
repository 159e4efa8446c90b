use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio codec era as reported by the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioClass {
    /// Realtek codec whose AppleHDA support was dropped.
    LegacyRealtek,
    /// AppleHDA codec on firmware without a GOP, where the audio shim fails to load.
    NonGopHda,
    /// Supported by the stock driver.
    Native,
    #[default]
    Unknown,
}

impl AudioClass {
    pub fn needs_legacy_audio(&self) -> bool {
        matches!(self, AudioClass::LegacyRealtek | AudioClass::NonGopHda)
    }
}

impl fmt::Display for AudioClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioClass::LegacyRealtek => write!(f, "Legacy Realtek"),
            AudioClass::NonGopHda => write!(f, "AppleHDA (no GOP)"),
            AudioClass::Native => write!(f, "Native"),
            AudioClass::Unknown => write!(f, "Unknown"),
        }
    }
}
