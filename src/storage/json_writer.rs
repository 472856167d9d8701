use crate::models::Collection;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Write the collection as pretty-printed JSON, creating parent directories.
pub fn write_collection(path: &Path, collection: &Collection) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(collection)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write collection file: {}", path.display()))?;

    info!("Stored collection JSON at: {}", path.display());
    Ok(())
}
