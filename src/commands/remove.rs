use super::read_manifest;
use anyhow::Result;
use clap::Args;
use serde_json::Value;
use updrop_models::Build;
use updrop_transport::{LocalBackend, PublishBackend};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Build ids to remove, e.g. win32-x64-prod-v1.2.3
    #[arg(required = true)]
    pub builds: Vec<String>,
}

pub async fn run(backend: &LocalBackend, args: RemoveArgs) -> Result<()> {
    let mut manifest = read_manifest(backend).await?;

    for raw in &args.builds {
        let build: Build = raw.parse()?;
        backend.remove_build(&build).await?;
        manifest.remove(&build.id());
        tracing::info!("Removed build {}", build.id());
    }

    backend.push_updates_json(&Value::Object(manifest)).await?;
    Ok(())
}
