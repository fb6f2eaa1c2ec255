// Data models — Rust structs that map to database rows.
//
// These are separate from the queries so the web and output layers can use
// them without depending on rusqlite directly.

use serde::{Deserialize, Serialize};

/// An accepted upload. The file content lives at `file_path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    pub file_path: String,
    pub original_name: String,
    pub size_bytes: i64,
    pub uploaded_at: String,
}

/// A stored word row as read back for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: i64,
    pub upload_id: Option<i64>,
    pub word: String,
    pub tf: f64,
    pub idf: f64,
    pub created_at: Option<String>,
}

/// Row counts for the status display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub uploads: i64,
    pub words: i64,
}
