use crate::client::{ShrinkService, TinifyClient};
use crate::config::Config;
use crate::error::{Result, ShrinkError};
use crate::ledger::Ledger;
use crate::scan::pending_candidates;
use crate::{error, info, verbose, warn};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

fn progress_bar(total: usize) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(total as u64);
    progress.set_style(ProgressStyle::default_bar());
    progress
}

/// Dispatches `files` in consecutive groups of at most `batch_size`.
///
/// Groups run strictly in sequence; jobs within a group run concurrently,
/// so peak in-flight work (open connections, buffered payloads) is one
/// group's worth. A failing job never cancels its siblings: the group is
/// always awaited to completion, every success in it is ledger-recorded,
/// and only then is the group's first failure raised, aborting all
/// not-yet-dispatched groups.
pub async fn run_batches<S>(
    service: &S,
    ledger: &Ledger,
    files: &[PathBuf],
    batch_size: usize,
) -> Result<()>
where
    S: ShrinkService + ?Sized,
{
    let progress = progress_bar(files.len());

    for group in files.chunks(batch_size.max(1)) {
        let attempts = group.iter().map(|file| service.compress(file, None));
        let results = join_all(attempts).await;

        let mut first_failure = None;
        for (file, result) in group.iter().zip(results) {
            match result {
                Ok(()) => {
                    ledger.record(file).await?;
                    info!("✅ Compressed {}", file.display());
                }
                Err(e) => {
                    error!("Failed to compress {}: {}", file.display(), e);
                    if first_failure.is_none() {
                        first_failure = Some(file.clone());
                    }
                }
            }
            progress.inc(1);
        }

        if let Some(file) = first_failure {
            progress.abandon();
            return Err(ShrinkError::BatchFailed(file));
        }
    }

    progress.finish_and_clear();
    Ok(())
}

/// Compresses every not-yet-recorded image under `root` in place.
///
/// A missing `root` is a no-op, not an error. The credential is checked
/// after scanning and before any network call; everything up to that point
/// (traversal, hashing, ledger lookups) is local.
pub async fn shrink_directory(root: &Path, config: &Config) -> Result<()> {
    shrink_directory_with(root, config, TinifyClient::new).await
}

/// `shrink_directory` with service construction injected, so tests can
/// drive the full run against a mock without a live network.
pub async fn shrink_directory_with<S, F>(root: &Path, config: &Config, make_service: F) -> Result<()>
where
    S: ShrinkService,
    F: FnOnce(&str) -> S,
{
    if !root.exists() {
        verbose!("Directory {} does not exist, nothing to do", root.display());
        return Ok(());
    }

    let ledger = Ledger::new(&config.ledger_path);
    let pending = pending_candidates(root, &ledger).await?;

    let service = make_service(config.require_api_key()?);

    if pending.is_empty() {
        info!("✨ All images under {} are already compressed", root.display());
        return Ok(());
    }

    info!("📊 Found {} images to compress", pending.len());
    run_batches(&service, &ledger, &pending, config.batch_size).await
}

/// Compresses a single file, writing to `output` (or over `input`), and
/// records the written content. An already-recorded input is skipped
/// unless `force` is set.
pub async fn shrink_file(
    input: &Path,
    output: Option<&Path>,
    force: bool,
    config: &Config,
) -> Result<()> {
    if !input.exists() {
        return Err(ShrinkError::FileNotFound(input.to_path_buf()));
    }

    let ledger = Ledger::new(&config.ledger_path);
    if !force && ledger.contains(input).await? {
        warn!(
            "{} is already compressed, skipping (use --force to recompress)",
            input.display()
        );
        return Ok(());
    }

    let client = TinifyClient::new(config.require_api_key()?);
    client.compress(input, output).await?;

    let written = output.unwrap_or(input);
    ledger.record(written).await?;
    info!("✅ Compressed {}", written.display());
    Ok(())
}
