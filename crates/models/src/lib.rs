use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One versioned release target. The id doubles as the directory key under
/// the output root, e.g. `win32-x64-prod-v1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub platform: String,
    pub arch: String,
    pub channel: String,
    pub version: String,
}

impl Build {
    pub fn new(
        platform: impl Into<String>,
        arch: impl Into<String>,
        channel: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            arch: arch.into(),
            channel: channel.into(),
            version: version.into(),
        }
    }

    /// Build identifier: `<platform>-<arch>-<channel>-v<version>`
    pub fn id(&self) -> String {
        format!(
            "{}-{}-{}-v{}",
            self.platform, self.arch, self.channel, self.version
        )
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildIdError {
    #[error("Invalid build id '{0}': expected <platform>-<arch>-<channel>-v<version>")]
    InvalidFormat(String),
}

impl FromStr for Build {
    type Err = BuildIdError;

    /// Parses ids like `win32-x64-prod-v1.2.3`. The version segment may
    /// itself contain dashes (`v1.2.3-beta.1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BuildIdError::InvalidFormat(s.to_string());

        let parts: Vec<&str> = s.splitn(4, '-').collect();
        if parts.len() != 4 {
            return Err(invalid());
        }

        let version = parts[3].strip_prefix('v').ok_or_else(invalid)?;
        if parts[..3].iter().any(|p| p.is_empty()) || version.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(parts[0], parts[1], parts[2], version))
    }
}
