use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Upload failed for '{0}': {1}")]
    UploadError(String, String),

    #[error("Invalid artifact path: {0}")]
    InvalidPath(String),

    #[error("No remote_url configured, cannot derive a public URL")]
    MissingRemoteUrl,
}
