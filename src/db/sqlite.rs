// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{StoreStats, UploadedFile, WordRecord};
use super::traits::Database;
use crate::scoring::word::ScoredWord;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_uploaded_file(
        &self,
        file_path: &str,
        original_name: &str,
        size_bytes: i64,
    ) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_uploaded_file(&conn, file_path, original_name, size_bytes)
    }

    async fn get_latest_upload(&self) -> Result<Option<UploadedFile>> {
        let conn = self.conn.lock().await;
        super::queries::get_latest_upload(&conn)
    }

    async fn insert_words(&self, upload_id: Option<i64>, words: &[ScoredWord]) -> Result<usize> {
        let conn = self.conn.lock().await;
        super::queries::insert_words(&conn, upload_id, words)
    }

    async fn get_top_words(&self, limit: u32) -> Result<Vec<WordRecord>> {
        let conn = self.conn.lock().await;
        super::queries::get_top_words(&conn, limit)
    }

    async fn get_words_for_upload(&self, upload_id: i64) -> Result<Vec<WordRecord>> {
        let conn = self.conn.lock().await;
        super::queries::get_words_for_upload(&conn, upload_id)
    }

    async fn get_stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock().await;
        super::queries::get_stats(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    async fn test_db() -> SqliteDatabase {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteDatabase::new(conn)
    }

    #[tokio::test]
    async fn test_trait_table_count() {
        let db = test_db().await;
        assert_eq!(db.table_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_trait_upload_and_words_roundtrip() {
        let db = test_db().await;
        let id = db
            .insert_uploaded_file("uploads/notes.txt", "notes.txt", 42)
            .await
            .unwrap();
        assert!(id > 0);

        let words = vec![
            ScoredWord {
                word: "cat".to_string(),
                tf: 0.894,
                idf: (1.0f64 / 3.0).ln(),
            },
            ScoredWord {
                word: "dog".to_string(),
                tf: 0.447,
                idf: 0.5f64.ln(),
            },
        ];
        assert_eq!(db.insert_words(Some(id), &words).await.unwrap(), 2);

        let top = db.get_top_words(50).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].word, "dog");

        let linked = db.get_words_for_upload(id).await.unwrap();
        assert_eq!(linked[0].word, "cat");

        let latest = db.get_latest_upload().await.unwrap().unwrap();
        assert_eq!(latest.original_name, "notes.txt");
    }

    #[tokio::test]
    async fn test_trait_stats_empty() {
        let db = test_db().await;
        assert_eq!(db.get_stats().await.unwrap(), StoreStats::default());
    }
}
