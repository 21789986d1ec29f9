use crate::error::{Result, ShrinkError};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Computes the lowercase hex SHA-256 digest of a file's current contents.
///
/// Fails with `FileNotFound` if the file is missing. The digest is computed
/// on demand and never cached: a file reverted to previously-compressed
/// bytes hashes back to its recorded digest.
pub async fn hash_file(path: &Path) -> Result<String> {
    let data = fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ShrinkError::FileNotFound(path.to_path_buf()),
        _ => ShrinkError::Io(e),
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Append-only store of content hashes for already-compressed files.
///
/// One digest per line. A digest present in the store means a file with
/// those exact bytes was successfully compressed before and must not be
/// resubmitted. Entries are never removed and never rewritten; duplicate
/// appends are harmless. Lookups scan the whole store.
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    /// Creates a handle over the store at `path`. The store itself need not
    /// exist yet; it is created on the first `record`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true iff the current content of `file` is recorded.
    /// An absent store is an empty ledger, never an error.
    pub async fn contains(&self, file: &Path) -> Result<bool> {
        let digest = hash_file(file).await?;

        if !self.path.exists() {
            return Ok(false);
        }

        let store = fs::read_to_string(&self.path).await?;
        Ok(store.lines().any(|line| line.trim() == digest))
    }

    /// Appends the current content hash of `file` to the store, creating the
    /// store if absent. Call only after `file` was successfully compressed.
    pub async fn record(&self, file: &Path) -> Result<()> {
        let digest = hash_file(file).await?;

        let mut store = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        store.write_all(format!("{digest}\n").as_bytes()).await?;
        Ok(())
    }

    /// Number of recorded entries; 0 when the store does not exist.
    pub async fn entry_count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let store = fs::read_to_string(&self.path).await?;
        Ok(store.lines().filter(|line| !line.trim().is_empty()).count())
    }
}
