// Database queries — CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::models::{StoreStats, UploadedFile, WordRecord};
use super::schema::WORD_MAX_CHARS;
use crate::scoring::word::ScoredWord;

// --- Uploaded files ---

/// Record an accepted upload and return its ID.
pub fn insert_uploaded_file(
    conn: &Connection,
    file_path: &str,
    original_name: &str,
    size_bytes: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO uploaded_files (file_path, original_name, size_bytes)
         VALUES (?1, ?2, ?3)",
        params![file_path, original_name, size_bytes],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Get the most recent upload, if any.
pub fn get_latest_upload(conn: &Connection) -> Result<Option<UploadedFile>> {
    let mut stmt = conn.prepare(
        "SELECT id, file_path, original_name, size_bytes, uploaded_at
         FROM uploaded_files
         ORDER BY id DESC
         LIMIT 1",
    )?;
    let result = stmt
        .query_row([], |row| {
            Ok(UploadedFile {
                id: row.get(0)?,
                file_path: row.get(1)?,
                original_name: row.get(2)?,
                size_bytes: row.get(3)?,
                uploaded_at: row.get(4)?,
            })
        })
        .optional()?;
    Ok(result)
}

// --- Words ---

/// Insert one scored word and return its row ID.
///
/// Words longer than the column bound are truncated to `WORD_MAX_CHARS`
/// characters.
pub fn insert_word(conn: &Connection, upload_id: Option<i64>, word: &ScoredWord) -> Result<i64> {
    let stored: String = word.word.chars().take(WORD_MAX_CHARS).collect();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO words (upload_id, word, tf, idf, created_at)
         VALUES (?1, ?2, ?3, ?4, datetime('now'))",
    )?;
    stmt.execute(params![upload_id, stored, word.tf, word.idf])?;
    Ok(conn.last_insert_rowid())
}

/// Insert every scored word, one row at a time.
///
/// There is no surrounding transaction: if an insert fails, the rows written
/// before it stay. Returns the number of rows inserted.
pub fn insert_words(conn: &Connection, upload_id: Option<i64>, words: &[ScoredWord]) -> Result<usize> {
    for word in words {
        insert_word(conn, upload_id, word)?;
    }
    Ok(words.len())
}

/// Top stored words across all uploads, by idf descending.
///
/// Ties keep insertion order so repeated queries are stable.
pub fn get_top_words(conn: &Connection, limit: u32) -> Result<Vec<WordRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, upload_id, word, tf, idf, created_at
         FROM words
         ORDER BY idf DESC, id ASC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], word_from_row)?;

    let mut words = Vec::new();
    for row in rows {
        words.push(row?);
    }
    Ok(words)
}

/// All words stored for one upload, in insertion (vocabulary) order.
pub fn get_words_for_upload(conn: &Connection, upload_id: i64) -> Result<Vec<WordRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, upload_id, word, tf, idf, created_at
         FROM words
         WHERE upload_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![upload_id], word_from_row)?;

    let mut words = Vec::new();
    for row in rows {
        words.push(row?);
    }
    Ok(words)
}

/// Count uploads and word rows.
pub fn get_stats(conn: &Connection) -> Result<StoreStats> {
    let stats = conn.query_row(
        "SELECT (SELECT COUNT(*) FROM uploaded_files), (SELECT COUNT(*) FROM words)",
        [],
        |row| {
            Ok(StoreStats {
                uploads: row.get(0)?,
                words: row.get(1)?,
            })
        },
    )?;
    Ok(stats)
}

fn word_from_row(row: &Row<'_>) -> rusqlite::Result<WordRecord> {
    Ok(WordRecord {
        id: row.get(0)?,
        upload_id: row.get(1)?,
        word: row.get(2)?,
        tf: row.get(3)?,
        idf: row.get(4)?,
        created_at: row.get(5)?,
    })
}
