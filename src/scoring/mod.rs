// Word scoring — vectorization plus the per-word IDF used for ranking.

pub mod tfidf;
pub mod traits;
pub mod vectorizer;
pub mod word;
