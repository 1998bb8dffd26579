use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub publish: PublishSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishSettings {
    /// Output root for published builds
    #[serde(default = "super::defaults::out_path")]
    pub out_path: String,
    /// Base URL under which the output root is served; required only for
    /// deriving public file URLs
    #[serde(default)]
    pub remote_url: Option<String>,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            out_path: super::defaults::out_path(),
            remote_url: None,
        }
    }
}
