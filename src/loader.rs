//! Source intake: load `.py` files into in-memory `{name, content}` records.

use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{AgentgraphError, Result};

/// One source text handed to the extractor. The name is metadata only
/// (diagnostics and staging); extraction never consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// Load Python sources from a file or directory path.
///
/// A single file must carry the `.py` extension (case-insensitive). A
/// directory is walked recursively; non-`.py` entries are skipped and a file
/// that cannot be read is logged and skipped rather than failing the batch.
/// A missing path, or a path that yields no usable sources, is an input
/// error: extraction is never attempted on an empty batch.
pub fn load_sources(path: &Path) -> Result<Vec<SourceFile>> {
    if !path.exists() {
        return Err(AgentgraphError::InvalidInput(format!(
            "Path does not exist: {}",
            path.display()
        )));
    }

    let files = if path.is_dir() {
        load_directory(path)?
    } else {
        vec![load_file(path)?]
    };

    if files.is_empty() {
        return Err(AgentgraphError::InvalidInput(format!(
            "No Python sources found at {}",
            path.display()
        )));
    }

    log::info!("Loaded {} source file(s) from {}", files.len(), path.display());
    Ok(files)
}

fn is_python(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("py"))
        .unwrap_or(false)
}

fn load_file(path: &Path) -> Result<SourceFile> {
    if !is_python(path) {
        return Err(AgentgraphError::InvalidInput(format!(
            "Not a Python file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SourceFile { name, content })
}

fn load_directory(root: &Path) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_python(path) {
            continue;
        }

        let name = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        match std::fs::read_to_string(path) {
            Ok(content) => files.push(SourceFile { name, content }),
            Err(e) => log::warn!("Skipping unreadable file {}: {}", path.display(), e),
        }
    }

    Ok(files)
}
