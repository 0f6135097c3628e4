//! Environment/runtime helpers
//!
//! Sanity checks to ensure the data directory exists at startup.

use std::path::Path;

use tracing::debug;

/// Ensure the directory holding `data_file` exists.
///
/// A bare file name (no parent component) needs nothing. The file itself is
/// left to the record store.
pub async fn ensure_data_dir(data_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        debug!(dir = %parent.display(), "data directory ready");
    }
    Ok(())
}
