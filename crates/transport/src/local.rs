use crate::backend::PublishBackend;
use crate::TransportError;
use std::path::{Path, PathBuf};
use tokio::fs;
use updrop_models::Build;
use updrop_utils::{file_name_of, normalize_file_name, normalize_path};

/// Manifest file name under the output root
pub const UPDATES_MANIFEST: &str = "updates.json";

/// Local filesystem publish backend. Artifacts land under
/// `<out_path>/<build id>/<normalized file name>`, one directory per build.
pub struct LocalBackend {
    out_path: PathBuf,
    remote_url: Option<String>,
}

impl LocalBackend {
    pub fn new(out_path: impl Into<PathBuf>, remote_url: Option<String>) -> Self {
        Self {
            out_path: out_path.into(),
            remote_url,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Destination path for an artifact. Forward slashes on every host OS,
    /// since the published layout mirrors the URL layout.
    pub fn out_file_path(
        &self,
        local_path: &Path,
        build: &Build,
    ) -> Result<String, TransportError> {
        let name = published_file_name(local_path)?;
        Ok(format!(
            "{}/{}/{}",
            normalize_path(&self.out_path),
            build.id(),
            name
        ))
    }
}

#[async_trait::async_trait]
impl PublishBackend for LocalBackend {
    async fn upload_file(&self, local_path: &Path, build: &Build) -> Result<String, TransportError> {
        let dest = PathBuf::from(self.out_file_path(local_path, build)?);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).await?;
        }

        let bytes = copy_file(local_path, &dest).await?;
        tracing::debug!(
            "Published {} -> {} ({} bytes)",
            local_path.display(),
            dest.display(),
            bytes
        );

        self.file_url(local_path, build)
    }

    async fn push_updates_json(&self, data: &serde_json::Value) -> Result<(), TransportError> {
        fs::create_dir_all(&self.out_path).await?;
        let payload = serde_json::to_string_pretty(data)?;
        fs::write(self.out_path.join(UPDATES_MANIFEST), payload).await?;
        Ok(())
    }

    async fn fetch_builds_list(&self) -> Result<Vec<String>, TransportError> {
        // A missing or unreadable output root means no builds yet, not an error
        Ok(list_build_dirs(&self.out_path).await.unwrap_or_default())
    }

    async fn remove_build(&self, build: &Build) -> Result<(), TransportError> {
        let dir = self.out_path.join(build.id());
        match fs::remove_dir_all(&dir).await {
            Ok(()) => {
                tracing::debug!("Removed build directory {}", dir.display());
                Ok(())
            }
            // Already removed
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn file_url(&self, local_path: &Path, build: &Build) -> Result<String, TransportError> {
        let base = self
            .remote_url
            .as_deref()
            .ok_or(TransportError::MissingRemoteUrl)?;
        // At most one trailing slash is stripped
        let base = base.strip_suffix('/').unwrap_or(base);
        let name = published_file_name(local_path)?;
        Ok(format!("{}/{}/{}", base, build.id(), name))
    }

    fn is_remote(&self) -> bool {
        false
    }
}

fn published_file_name(local_path: &Path) -> Result<String, TransportError> {
    let name = file_name_of(local_path)
        .map_err(|_| TransportError::InvalidPath(local_path.display().to_string()))?;
    Ok(normalize_file_name(&name))
}

/// Streams source into dest, overwriting dest if it exists. Both handles are
/// closed on every failure path when they drop.
async fn copy_file(source: &Path, dest: &Path) -> Result<u64, TransportError> {
    let mut src = fs::File::open(source).await?;
    let mut dst = fs::File::create(dest).await?;
    let bytes = tokio::io::copy(&mut src, &mut dst)
        .await
        .map_err(|e| TransportError::UploadError(source.display().to_string(), e.to_string()))?;
    Ok(bytes)
}

async fn list_build_dirs(out_path: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = fs::read_dir(out_path).await?;
    let mut builds = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if fs::metadata(entry.path()).await?.is_dir() {
            builds.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(builds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn build(version: &str) -> Build {
        Build::new("win32", "x64", "prod", version)
    }

    async fn write_artifact(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_upload_copies_bytes_to_out_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("publish");
        let backend = LocalBackend::new(&out, Some("https://cdn.example.com".to_string()));

        let artifact = write_artifact(dir.path(), "App Setup.exe", b"binary payload").await;
        let b = build("1.2.3");

        let url = backend.upload_file(&artifact, &b).await.unwrap();
        assert_eq!(
            url,
            "https://cdn.example.com/win32-x64-prod-v1.2.3/app-setup.exe"
        );

        let dest = backend.out_file_path(&artifact, &b).unwrap();
        let copied = fs::read(&dest).await.unwrap();
        assert_eq!(copied, b"binary payload");
    }

    #[tokio::test]
    async fn test_upload_overwrites_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("publish");
        let backend = LocalBackend::new(&out, Some("https://cdn.example.com".to_string()));
        let b = build("1.2.3");

        let artifact = write_artifact(dir.path(), "app.exe", b"first").await;
        backend.upload_file(&artifact, &b).await.unwrap();

        fs::write(&artifact, b"second, longer payload").await.unwrap();
        backend.upload_file(&artifact, &b).await.unwrap();

        let dest = backend.out_file_path(&artifact, &b).unwrap();
        assert_eq!(fs::read(&dest).await.unwrap(), b"second, longer payload");
    }

    #[tokio::test]
    async fn test_upload_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(
            dir.path().join("publish"),
            Some("https://cdn.example.com".to_string()),
        );

        let missing = dir.path().join("nope.exe");
        assert!(backend.upload_file(&missing, &build("1.2.3")).await.is_err());
    }

    #[tokio::test]
    async fn test_upload_without_remote_url_fails() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(dir.path().join("publish"), None);
        let artifact = write_artifact(dir.path(), "app.exe", b"payload").await;

        let err = backend
            .upload_file(&artifact, &build("1.2.3"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::MissingRemoteUrl));
    }

    #[test]
    fn test_file_url_strips_one_trailing_slash() {
        let backend = LocalBackend::new(
            "dist/publish",
            Some("https://cdn.example.com/app/".to_string()),
        );
        let url = backend
            .file_url(Path::new("out/app.exe"), &build("1.2.3"))
            .unwrap();
        assert_eq!(url, "https://cdn.example.com/app/win32-x64-prod-v1.2.3/app.exe");

        // Only one slash is stripped, never more
        let backend = LocalBackend::new(
            "dist/publish",
            Some("https://cdn.example.com/app//".to_string()),
        );
        let url = backend
            .file_url(Path::new("app.exe"), &build("1.2.3"))
            .unwrap();
        assert_eq!(url, "https://cdn.example.com/app//win32-x64-prod-v1.2.3/app.exe");
    }

    #[test]
    fn test_out_file_path_is_posix_style() {
        let backend = LocalBackend::new("dist/publish", None);
        let path = backend
            .out_file_path(Path::new("build/Artifact Name.zip"), &build("2.0.0"))
            .unwrap();
        assert_eq!(path, "dist/publish/win32-x64-prod-v2.0.0/artifact-name.zip");
    }

    #[tokio::test]
    async fn test_fetch_builds_list_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(dir.path().join("does-not-exist"), None);
        assert!(backend.fetch_builds_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_builds_list_skips_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("publish");
        let backend = LocalBackend::new(&out, Some("https://cdn.example.com".to_string()));

        let artifact = write_artifact(dir.path(), "app.exe", b"payload").await;
        backend.upload_file(&artifact, &build("1.0.0")).await.unwrap();
        backend.upload_file(&artifact, &build("1.0.1")).await.unwrap();
        backend.push_updates_json(&json!({})).await.unwrap();

        let builds: HashSet<String> = backend
            .fetch_builds_list()
            .await
            .unwrap()
            .into_iter()
            .collect();
        let expected: HashSet<String> = ["win32-x64-prod-v1.0.0", "win32-x64-prod-v1.0.1"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(builds, expected);
    }

    #[tokio::test]
    async fn test_remove_build_unlists_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("publish");
        let backend = LocalBackend::new(&out, Some("https://cdn.example.com".to_string()));

        let artifact = write_artifact(dir.path(), "app.exe", b"payload").await;
        let b = build("1.0.0");
        backend.upload_file(&artifact, &b).await.unwrap();

        backend.remove_build(&b).await.unwrap();
        assert!(backend.fetch_builds_list().await.unwrap().is_empty());

        // Removing an absent build is a no-op
        backend.remove_build(&b).await.unwrap();
    }

    #[tokio::test]
    async fn test_push_updates_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/publish");
        let backend = LocalBackend::new(&out, None);

        let data = json!({"win32-x64-prod-v1.2.3": {"update": "https://cdn.example.com/app"}});
        backend.push_updates_json(&data).await.unwrap();

        let content = fs::read_to_string(out.join(UPDATES_MANIFEST)).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, data);
        // Pretty-printed with 2-space indentation
        assert!(content.contains("\n  \""));
    }
}
