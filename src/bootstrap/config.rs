use anyhow::Result;
use updrop_config::Config;

pub async fn load(config_path: &str) -> Result<Config> {
    let config = Config::from_file(config_path).await?;

    tracing::debug!(
        "Configuration loaded from {} (out_path: {}, remote_url: {})",
        config_path,
        config.publish.out_path,
        config.publish.remote_url.as_deref().unwrap_or("<unset>")
    );

    Ok(config)
}
