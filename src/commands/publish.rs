use super::read_manifest;
use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;
use updrop_models::Build;
use updrop_transport::{LocalBackend, PublishBackend};

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Build id, e.g. win32-x64-prod-v1.2.3
    #[arg(short, long)]
    pub build: String,

    /// Artifact files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub async fn run(backend: &LocalBackend, args: PublishArgs) -> Result<()> {
    let build: Build = args.build.parse()?;

    let mut urls = Vec::new();
    for file in &args.files {
        let url = backend
            .upload_file(file, &build)
            .await
            .with_context(|| format!("failed to publish {}", file.display()))?;
        tracing::info!("Published {} -> {}", file.display(), url);
        urls.push(Value::String(url));
    }

    let mut manifest = read_manifest(backend).await?;
    manifest.insert(build.id(), json!({ "files": urls }));
    backend.push_updates_json(&Value::Object(manifest)).await?;

    tracing::info!("Build {} published ({} files)", build.id(), args.files.len());
    Ok(())
}
