// TF-IDF word scorer.
//
// The whole uploaded file is a one-document corpus. The vectorizer supplies
// each term's normalized weight (stored as `tf`). The `idf` column is NOT the
// vectorizer's IDF: it is ln(num_documents / (word_count + 1)) over
// whitespace-split tokens, with num_documents fixed at 1. That makes it
// always <= 0 and more negative for frequent words, so ranking by idf
// descending surfaces the rarest words first.

use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, warn};

use super::traits::WordScorer;
use super::vectorizer::{TfIdfVectorizer, VectorizerParams};
use super::word::ScoredWord;

/// Only one document exists per scoring pass.
pub const NUM_DOCUMENTS: u32 = 1;

/// Default scorer backed by [`TfIdfVectorizer`].
#[derive(Debug, Clone, Default)]
pub struct TfIdfScorer {
    vectorizer: TfIdfVectorizer,
}

impl TfIdfScorer {
    pub fn new(params: VectorizerParams) -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(params),
        }
    }
}

impl WordScorer for TfIdfScorer {
    fn score(&self, text: &str) -> Result<Vec<ScoredWord>> {
        let matrix = self.vectorizer.fit_transform(&[text])?;

        if matrix.vocabulary.is_empty() {
            if !text.trim().is_empty() {
                warn!(
                    chars = text.chars().count(),
                    "No extractable words in non-empty text"
                );
            }
            return Ok(Vec::new());
        }

        // One pass over the whitespace tokens; each term is then a lookup
        let lowered = text.to_lowercase();
        let counts = token_counts(&lowered);

        let words: Vec<ScoredWord> = matrix
            .row(0)
            .map(|(word, tf)| ScoredWord {
                word: word.to_string(),
                tf,
                idf: idf_from_count(
                    counts.get(word.to_lowercase().as_str()).copied().unwrap_or(0),
                    NUM_DOCUMENTS,
                ),
            })
            .collect();

        debug!(vocabulary = words.len(), distinct_tokens = counts.len(), "Scored document");
        Ok(words)
    }
}

/// IDF of `word` within `text`, as stored in the `idf` column.
///
/// Counts whitespace-delimited tokens of the lowercased text equal to the
/// lowercased word. Zero matches gives 0; otherwise
/// `ln(num_documents / (count + 1))`.
pub fn calc_idf(text: &str, word: &str, num_documents: u32) -> f64 {
    let lowered = text.to_lowercase();
    let word = word.to_lowercase();
    let count = lowered.split_whitespace().filter(|t| *t == word).count();
    idf_from_count(count, num_documents)
}

/// Occurrences of each whitespace-delimited token.
fn token_counts(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn idf_from_count(word_count: usize, num_documents: u32) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    (num_documents as f64 / (word_count as f64 + 1.0)).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cat_dog_cat() {
        let words = TfIdfScorer::default().score("cat dog cat").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "cat");
        assert!(approx(words[0].idf, (1.0f64 / 3.0).ln()));
        assert_eq!(words[1].word, "dog");
        assert!(approx(words[1].idf, (0.5f64).ln()));
    }

    #[test]
    fn test_case_insensitive_counting() {
        let words = TfIdfScorer::default().score("Cat CAT cat").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "cat");
        assert!(approx(words[0].idf, (0.25f64).ln()));
        assert!(approx(words[0].tf, 1.0));
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        let scorer = TfIdfScorer::default();
        assert!(scorer.score("").unwrap().is_empty());
        assert!(scorer.score(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_punctuation_attached_word_gets_zero_idf() {
        // "cat," is the only whitespace token, so "cat" never matches exactly
        let words = TfIdfScorer::default().score("cat,").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].idf, 0.0);
    }

    #[test]
    fn test_token_counts_split_on_whitespace_only() {
        let counts = token_counts("cat cat,\tcat\ndog");
        assert_eq!(counts.get("cat"), Some(&2));
        assert_eq!(counts.get("cat,"), Some(&1));
        assert_eq!(counts.get("dog"), Some(&1));
    }

    #[test]
    fn test_calc_idf_zero_count_branch() {
        assert_eq!(calc_idf("dog dog", "cat", 1), 0.0);
    }

    #[test]
    fn test_calc_idf_matches_mixed_case_word() {
        assert!(approx(calc_idf("DOG dog", "Dog", 1), (1.0f64 / 3.0).ln()));
    }

    #[test]
    fn test_calc_idf_respects_document_count() {
        assert!(approx(calc_idf("cat", "cat", 4), 2f64.ln()));
    }
}
