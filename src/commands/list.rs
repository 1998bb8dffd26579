use anyhow::Result;
use updrop_transport::{LocalBackend, PublishBackend};

pub async fn run(backend: &LocalBackend) -> Result<()> {
    let mut builds = backend.fetch_builds_list().await?;
    builds.sort();

    if builds.is_empty() {
        tracing::info!("No builds published under {}", backend.out_path().display());
        return Ok(());
    }

    for id in builds {
        println!("{id}");
    }
    Ok(())
}
