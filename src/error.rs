use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShrinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("TINIFY_KEY is not set (export it or add it to a .env file)")]
    MissingApiKey,

    #[error("Compression request rejected: HTTP {status}")]
    UploadRejected { status: reqwest::StatusCode },

    #[error("Failed to download image {url}")]
    DownloadFailed { url: String },

    #[error("Failed to compress {0:?}")]
    BatchFailed(PathBuf),
}

pub type Result<T> = std::result::Result<T, ShrinkError>;
