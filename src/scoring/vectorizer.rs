// TF-IDF vectorizer — the term-frequency extraction step behind the scorer.
//
// Behaves like the usual "fit_transform over a corpus" vectorizer:
// lowercase, split into tokens of two or more word characters, drop stop
// words, count, weight with smoothed IDF, then L2-normalize each row.
// The vocabulary is kept in a BTreeMap so feature order is lexicographic.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use stop_words::{get, LANGUAGE};

// `\w` here is Unicode: letters, digits, connector punctuation and marks
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?u)\b\w\w+\b").expect("token pattern is valid"));

/// Knobs for the vectorizer. Defaults match the conventional TF-IDF setup.
#[derive(Debug, Clone)]
pub struct VectorizerParams {
    /// Fold case before tokenizing
    pub lowercase: bool,
    /// Terms removed after tokenization (already lowercased when `lowercase` is set)
    pub stop_words: Vec<String>,
    /// Add one to document frequencies, as if an extra document contained every term
    pub smooth_idf: bool,
    /// Replace raw counts with 1 + ln(count)
    pub sublinear_tf: bool,
    /// Scale each document row to unit Euclidean length
    pub l2_normalize: bool,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            lowercase: true,
            stop_words: Vec::new(),
            smooth_idf: true,
            sublinear_tf: false,
            l2_normalize: true,
        }
    }
}

impl VectorizerParams {
    /// Use the English stop-word list from the `stop-words` crate.
    pub fn with_english_stop_words(mut self) -> Self {
        self.stop_words = get(LANGUAGE::English);
        self
    }
}

/// Output of a fit: the sorted vocabulary plus one weight row per document.
///
/// `weights[d][i]` is the weight of `vocabulary[i]` in document `d`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    pub vocabulary: Vec<String>,
    pub weights: Vec<Vec<f64>>,
}

impl TermMatrix {
    /// Iterate (term, weight) pairs for one document, in vocabulary order.
    pub fn row(&self, doc: usize) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.vocabulary
            .iter()
            .map(String::as_str)
            .zip(self.weights.get(doc).into_iter().flatten().copied())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    params: VectorizerParams,
}

impl TfIdfVectorizer {
    pub fn new(params: VectorizerParams) -> Self {
        Self { params }
    }

    /// Split text into tokens: runs of two or more Unicode word characters
    /// between word boundaries.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.params.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut tokens: Vec<String> = TOKEN_PATTERN
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect();

        if !self.params.stop_words.is_empty() {
            tokens.retain(|t| !self.params.stop_words.iter().any(|s| s == t));
        }
        tokens
    }

    /// Learn the vocabulary of `documents` and return their weight rows.
    ///
    /// A corpus without any token produces an empty vocabulary (and empty rows)
    /// instead of an error.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TermMatrix> {
        if documents.is_empty() {
            anyhow::bail!("Cannot vectorize an empty corpus — at least one document is required");
        }

        let counts: Vec<BTreeMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut map = BTreeMap::new();
                for token in self.tokenize(doc.as_ref()) {
                    *map.entry(token).or_insert(0u32) += 1;
                }
                map
            })
            .collect();

        // Document frequency per term; BTreeMap keys give the sorted vocabulary
        let mut doc_freq: BTreeMap<&str, u32> = BTreeMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| self.idf(n_docs, df as f64))
            .collect();
        let vocabulary: Vec<String> = doc_freq.keys().map(|t| t.to_string()).collect();

        let weights = counts
            .iter()
            .map(|doc| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(&idf)
                    .map(|(term, idf)| match doc.get(term) {
                        Some(&count) => self.term_weight(count) * idf,
                        None => 0.0,
                    })
                    .collect();
                if self.params.l2_normalize {
                    l2_normalize(&mut row);
                }
                row
            })
            .collect();

        Ok(TermMatrix {
            vocabulary,
            weights,
        })
    }

    fn idf(&self, n_docs: f64, df: f64) -> f64 {
        if self.params.smooth_idf {
            ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
        } else {
            (n_docs / df).ln() + 1.0
        }
    }

    fn term_weight(&self, count: u32) -> f64 {
        if self.params.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}
