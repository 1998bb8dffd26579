use crate::TransportError;
use std::path::Path;
use updrop_models::Build;

/// Hosting backend trait for the publish pipeline. Remote backends (SSH,
/// object storage) implement the same surface against their own stores.
#[async_trait::async_trait]
pub trait PublishBackend: Send + Sync {
    /// Upload one artifact into the build's directory, returns its public URL
    async fn upload_file(&self, local_path: &Path, build: &Build) -> Result<String, TransportError>;

    /// Overwrite the updates.json manifest with the given document
    async fn push_updates_json(&self, data: &serde_json::Value) -> Result<(), TransportError>;

    /// Ids of builds currently published; enumeration order is unspecified
    async fn fetch_builds_list(&self) -> Result<Vec<String>, TransportError>;

    /// Delete everything stored for a build; absent builds are a no-op
    async fn remove_build(&self, build: &Build) -> Result<(), TransportError>;

    /// Public URL for an artifact (without uploading)
    fn file_url(&self, local_path: &Path, build: &Build) -> Result<String, TransportError>;

    /// Check if backend is local or remote
    fn is_remote(&self) -> bool;
}
