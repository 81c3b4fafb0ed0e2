//! Staging: write loaded sources to the well-known path the renderer fetches.

use std::path::Path;

use crate::error::Result;
use crate::loader::SourceFile;

/// Serialize the loaded `{name, content}` records as pretty JSON at `output`,
/// creating parent directories as needed. The rendering page retrieves this
/// blob; the transport contract ends here.
pub fn stage_sources(files: &[SourceFile], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(files)?;
    std::fs::write(output, json)?;

    log::info!("Staged {} source file(s) to {}", files.len(), output.display());
    Ok(())
}
