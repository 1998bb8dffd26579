use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::models::Config;
use std::path::Path;

impl Config {
    /// Loads configuration from a file, writing a commented default template
    /// first if the file does not exist
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            create_default_config(path).await?;
            tracing::info!("Created default configuration at {}", path.display());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let mut config: Config = toml::from_str(&content)?;

        // An empty out_path behaves as if it were unset
        if config.publish.out_path.trim().is_empty() {
            config.publish.out_path = super::defaults::out_path();
        }

        if let Some(url) = config.publish.remote_url.as_deref() {
            if url.trim().is_empty() || !url.contains("://") {
                return Err(ConfigError::InvalidConfig(format!(
                    "remote_url '{url}' is not an absolute URL"
                )));
            }
        }

        Ok(config)
    }
}

async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}
