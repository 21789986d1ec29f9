use crate::error::Result;
use crate::ledger::Ledger;
use crate::scan::collect_candidates;
use crate::{info, warn};
use std::path::Path;

/// Reports how many images under `root` are already recorded vs still
/// pending. Read-only: no credential, no network.
pub async fn report_status(root: &Path, ledger: &Ledger) -> Result<()> {
    if !root.exists() {
        warn!("Directory {} does not exist", root.display());
        return Ok(());
    }

    let candidates = collect_candidates(root)?;
    let mut recorded = 0usize;
    let mut pending = 0usize;

    for file in &candidates {
        if ledger.contains(file).await? {
            recorded += 1;
        } else {
            pending += 1;
        }
    }

    info!("📋 Compression status for {}:", root.display());
    info!("  🖼️  Image files found: {}", candidates.len());
    info!("  ✅ Already compressed: {}", recorded);
    info!("  ⏳ Pending compression: {}", pending);
    info!("  📒 Ledger entries: {}", ledger.entry_count().await?);

    Ok(())
}
