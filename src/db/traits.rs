// Database trait — async interface for all DB operations.
//
// Implementor: SqliteDatabase (wraps rusqlite behind a tokio Mutex).
// The methods mirror the free functions in queries.rs so handlers can hold
// an `Arc<dyn Database>` instead of a raw Connection.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{StoreStats, UploadedFile, WordRecord};
use crate::scoring::word::ScoredWord;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Uploads ---

    /// Record an accepted upload and return its ID.
    async fn insert_uploaded_file(
        &self,
        file_path: &str,
        original_name: &str,
        size_bytes: i64,
    ) -> Result<i64>;

    /// The most recent upload, if any.
    async fn get_latest_upload(&self) -> Result<Option<UploadedFile>>;

    // --- Words ---

    /// Store each scored word as its own row. Returns the number inserted.
    async fn insert_words(&self, upload_id: Option<i64>, words: &[ScoredWord]) -> Result<usize>;

    /// Top words across all uploads, ranked by idf descending.
    async fn get_top_words(&self, limit: u32) -> Result<Vec<WordRecord>>;

    /// Words stored for one upload, in insertion order.
    async fn get_words_for_upload(&self, upload_id: i64) -> Result<Vec<WordRecord>>;

    /// Row counts for status output.
    async fn get_stats(&self) -> Result<StoreStats>;
}
