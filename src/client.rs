use crate::constants::TINIFY_ENDPOINT;
use crate::error::{Result, ShrinkError};
use async_trait::async_trait;
use base64::Engine;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Capability interface over the remote compression service: upload bytes,
/// fetch a result. Protocol specifics (HTTP, JSON field names) live behind
/// it, so the dispatcher can be exercised against a mock.
#[async_trait]
pub trait ShrinkService: Send + Sync {
    /// Uploads raw image bytes and returns the URL of the compressed result.
    async fn shrink(&self, data: Vec<u8>) -> Result<String>;

    /// Streams the compressed result at `url` into `dest`, overwriting it.
    async fn download(&self, url: &str, dest: &Path) -> Result<()>;

    /// Compresses the file at `src`, writing the result to `dest` (or back
    /// over `src` when `dest` is `None`).
    ///
    /// A job that fails during the download leaves the destination in an
    /// undefined state (possibly truncated); retrying re-runs the whole
    /// compression for that file.
    async fn compress(&self, src: &Path, dest: Option<&Path>) -> Result<()> {
        if !src.exists() {
            return Err(ShrinkError::FileNotFound(src.to_path_buf()));
        }

        let dest = dest.unwrap_or(src);
        let data = fs::read(src).await?;
        let url = self.shrink(data).await?;
        self.download(&url, dest).await
    }
}

#[derive(Debug, Deserialize)]
struct ShrinkResponse {
    output: ShrinkOutput,
}

#[derive(Debug, Deserialize)]
struct ShrinkOutput {
    url: String,
}

/// Client for the TinyPNG `/shrink` endpoint.
pub struct TinifyClient {
    http: Client,
    endpoint: String,
    auth_header: String,
}

impl TinifyClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_endpoint(api_key, TINIFY_ENDPOINT)
    }

    /// Builds a client against a non-default API host.
    pub fn with_endpoint(api_key: &str, endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            auth_header: basic_auth_header(api_key),
        }
    }

    async fn stream_to_file(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ShrinkError::DownloadFailed {
                url: url.to_string(),
            });
        }

        // Chunked copy: the compressed payload is never buffered in full on
        // top of the upload buffer.
        let mut file = fs::File::create(dest).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(())
    }
}

/// The service authenticates with HTTP Basic auth over the fixed user
/// `"api"` and the account key as password.
fn basic_auth_header(api_key: &str) -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("api:{api_key}"));
    format!("Basic {token}")
}

#[async_trait]
impl ShrinkService for TinifyClient {
    async fn shrink(&self, data: Vec<u8>) -> Result<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, self.auth_header.as_str())
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(ShrinkError::UploadRejected { status });
        }

        let body: ShrinkResponse = response.json().await?;
        Ok(body.output.url)
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        // Collapse every failure mode of the retrieval stage (status,
        // network, partial transfer, file write) into one download error.
        self.stream_to_file(url, dest)
            .await
            .map_err(|_| ShrinkError::DownloadFailed {
                url: url.to_string(),
            })
    }
}
