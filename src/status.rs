// System status display — DB stats, latest upload, upload directory.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::Database;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, db_path: &str, upload_dir: &Path) -> Result<()> {
    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);

    let stats = db.get_stats().await?;
    println!("Uploads: {}", stats.uploads);
    println!("Stored words: {}", stats.words);

    match db.get_latest_upload().await? {
        Some(upload) => {
            println!(
                "Latest upload: {} ({}, {}) at {}",
                upload.original_name,
                format_bytes(upload.size_bytes.max(0) as u64),
                upload.file_path,
                upload.uploaded_at
            );
        }
        None => {
            println!("Latest upload: none yet");
            println!("  Run `tfidf-upload serve` and open /upload_form/");
        }
    }

    if upload_dir.is_dir() {
        println!("Upload directory: {}", upload_dir.display());
    } else {
        println!("Upload directory: {} (not created yet)", upload_dir.display());
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
