//! Rendering and writing of block sequences.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::Block;

/// Serialization format for the block sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// YAML sequence.
    Yaml,
}

/// Render blocks in the given format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(blocks: &[Block], format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(blocks)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(blocks)?,
    };
    Ok(content)
}

/// Write content to a file atomically.
///
/// Writes to a hidden temp file next to the target, syncs it, then renames
/// it over the target, so a failed run never leaves a half-written file.
/// The temp file is removed again when any step fails.
///
/// # Errors
/// Returns an IO error if any filesystem step fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "blocks".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    let result = write_synced(&temp_file, content).and_then(|()| replace(&temp_file, path));
    if let Err(e) = &result {
        tracing::debug!(path = %temp_file.display(), error = %e, "Removing temp file");
        let _ = fs::remove_file(&temp_file);
    }

    result?;
    Ok(())
}

fn write_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

fn replace(from: &Path, to: &Path) -> io::Result<()> {
    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if to.exists() {
        fs::remove_file(to)?;
    }

    fs::rename(from, to)
}
