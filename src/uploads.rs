// Upload storage — writes accepted files under the upload directory.
//
// Stored names are `{utc timestamp}_{sanitized original name}` so two uploads
// of the same file never collide and the directory sorts chronologically.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

/// Longest sanitized name kept, in characters (before the timestamp prefix).
const MAX_NAME_CHARS: usize = 80;

/// Create the upload directory if it doesn't exist.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory: {}", dir.display()))
}

/// Write `bytes` to a fresh file in `dir` and return its path.
pub async fn store(dir: &Path, original_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    ensure_dir(dir).await?;

    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6f");
    let path = dir.join(format!("{stamp}_{}", sanitize_file_name(original_name)));

    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write upload to {}", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "Stored upload");
    Ok(path)
}

/// Read a stored upload back as UTF-8 text.
///
/// Invalid UTF-8 is an error; nothing is replaced or skipped.
pub async fn read_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read upload at {}", path.display()))?;
    String::from_utf8(bytes)
        .with_context(|| format!("Upload at {} is not valid UTF-8", path.display()))
}

/// Reduce a client-supplied file name to a safe basename.
///
/// Keeps only the final path component, replaces anything outside
/// `[A-Za-z0-9._-]` with `_`, and never returns an empty or dot-only name.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_CHARS)
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        "upload.txt".to_string()
    } else {
        cleaned
    }
}
