pub mod list;
pub mod publish;
pub mod remove;

use anyhow::Result;
use serde_json::{Map, Value};
use updrop_transport::{LocalBackend, UPDATES_MANIFEST};

/// Current manifest contents as a JSON object, empty when absent. Reading
/// before rewriting keeps other builds' entries intact.
async fn read_manifest(backend: &LocalBackend) -> Result<Map<String, Value>> {
    let path = backend.out_path().join(UPDATES_MANIFEST);
    if !path.exists() {
        return Ok(Map::new());
    }

    let content = tokio::fs::read_to_string(&path).await?;
    match serde_json::from_str(&content)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
