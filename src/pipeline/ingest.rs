// Ingest pipeline: stored upload → text → scored words → word rows.
//
// Used by POST /upload_form/ and by `tfidf-upload score`. Each step runs to
// completion before the next; there is no transaction around the word
// inserts, so a failure part-way leaves the rows already written.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::db::Database;
use crate::scoring::traits::WordScorer;
use crate::scoring::word::ScoredWord;
use crate::uploads;

/// What one ingest produced.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub upload_id: i64,
    pub words: Vec<ScoredWord>,
    pub rows_inserted: usize,
}

/// Store `bytes` as a new upload, score it, and persist one row per word.
pub async fn ingest_bytes(
    db: &Arc<dyn Database>,
    scorer: &dyn WordScorer,
    upload_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> Result<IngestOutcome> {
    let path = uploads::store(upload_dir, original_name, bytes).await?;
    let upload_id = db
        .insert_uploaded_file(&path.to_string_lossy(), original_name, bytes.len() as i64)
        .await?;

    // Read back from disk so scoring always sees exactly what was stored
    let text = uploads::read_text(&path).await?;
    let words = scorer.score(&text)?;
    let rows_inserted = db.insert_words(Some(upload_id), &words).await?;

    info!(
        upload_id,
        file = original_name,
        words = rows_inserted,
        "Ingested upload"
    );

    Ok(IngestOutcome {
        upload_id,
        words,
        rows_inserted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::scoring::tfidf::TfIdfScorer;

    #[tokio::test]
    async fn test_ingest_persists_every_word() {
        let tmp = tempfile::tempdir().unwrap();
        let db = db::in_memory().unwrap();
        let scorer = TfIdfScorer::default();

        let outcome = ingest_bytes(&db, &scorer, tmp.path(), "pets.txt", b"cat dog cat")
            .await
            .unwrap();

        assert_eq!(outcome.rows_inserted, 2);
        let stored = db.get_words_for_upload(outcome.upload_id).await.unwrap();
        let names: Vec<&str> = stored.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, vec!["cat", "dog"]);
    }

    #[tokio::test]
    async fn test_ingest_invalid_utf8_fails_after_upload_row() {
        let tmp = tempfile::tempdir().unwrap();
        let db = db::in_memory().unwrap();
        let scorer = TfIdfScorer::default();

        let result = ingest_bytes(&db, &scorer, tmp.path(), "bad.txt", &[0xc3, 0x28]).await;
        assert!(result.is_err());

        let stats = db.get_stats().await.unwrap();
        assert_eq!(stats.uploads, 1);
        assert_eq!(stats.words, 0);
    }
}
