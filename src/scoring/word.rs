// ScoredWord — one vocabulary term with its two scores.

use serde::{Deserialize, Serialize};

/// A word extracted from an uploaded document.
///
/// `tf` is the vectorizer's normalized TF-IDF weight for the word (the name is
/// historical; it is not a raw term frequency). `idf` is computed separately
/// from whitespace-split counts, see [`crate::scoring::tfidf::calc_idf`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub tf: f64,
    pub idf: f64,
}
