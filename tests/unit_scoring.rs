// Unit tests for the word scorer and output helpers.
//
// Tests isolated pure functions: TfIdfScorer::score properties and worked
// examples, calc_idf branches, and truncate_chars UTF-8 safety.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use tfidf_upload::output::truncate_chars;
use tfidf_upload::scoring::tfidf::{calc_idf, TfIdfScorer, NUM_DOCUMENTS};
use tfidf_upload::scoring::traits::WordScorer;
use tfidf_upload::scoring::vectorizer::{TfIdfVectorizer, VectorizerParams};

fn score(text: &str) -> Vec<tfidf_upload::scoring::word::ScoredWord> {
    TfIdfScorer::default().score(text).unwrap()
}

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog.\n\
                      The dog sleeps; the fox runs away.\n\
                      Quick thinking saves the day, said the fox";

// ============================================================
// Worked examples
// ============================================================

#[test]
fn cat_dog_cat_scores() {
    let words = score("cat dog cat");
    assert_eq!(words.len(), 2);

    assert_eq!(words[0].word, "cat");
    assert!((words[0].idf - (-1.0986)).abs() < 1e-4);
    assert_eq!(words[1].word, "dog");
    assert!((words[1].idf - (-0.6931)).abs() < 1e-4);

    // tf is the L2-normalized count: 2/sqrt(5) and 1/sqrt(5)
    assert!((words[0].tf - 0.894_427).abs() < 1e-5);
    assert!((words[1].tf - 0.447_214).abs() < 1e-5);
}

#[test]
fn empty_text_gives_empty_list() {
    assert!(score("").is_empty());
}

#[test]
fn mixed_case_collapses_to_one_word() {
    let words = score("Cat CAT cat");
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "cat");
    assert!((words[0].idf - (-1.3863)).abs() < 1e-4);
}

#[test]
fn only_single_letters_gives_empty_list() {
    assert!(score("a b c d").is_empty());
}

#[test]
fn devanagari_word_with_marks_stays_whole() {
    let words = score("नमस्ते नमस्ते");
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "नमस्ते");
    assert!((words[0].idf - (1.0f64 / 3.0).ln()).abs() < 1e-12);
    assert!((words[0].tf - 1.0).abs() < 1e-12);
}

#[test]
fn decomposed_accent_stays_whole() {
    let words = score("cafe\u{301} cafe\u{301}");
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "cafe\u{301}");
    assert!((words[0].idf - (1.0f64 / 3.0).ln()).abs() < 1e-12);
}

// ============================================================
// Properties
// ============================================================

#[test]
fn every_word_appears_in_text() {
    let lowered = SAMPLE.to_lowercase();
    for w in score(SAMPLE) {
        assert!(lowered.contains(&w.word), "{} not found in text", w.word);
    }
}

#[test]
fn unpunctuated_text_gives_every_word_a_nonzero_idf() {
    // Without punctuation every extracted word is also a whitespace token
    let texts = [
        "the quick brown fox jumps over the lazy dog",
        "नमस्ते दुनिया नमस्ते हिन्दी",
        "Привет мир привет snake_case",
        "cafe\u{301} café Über über straße",
        "ประเทศไทย สวัสดี",
    ];
    for text in texts {
        let tokens: BTreeSet<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let words = score(text);
        assert!(!words.is_empty(), "no words from {text:?}");
        for w in words {
            assert!(tokens.contains(&w.word), "{:?} is not a token of {text:?}", w.word);
            assert!(w.idf < 0.0, "{:?} has idf {} in {text:?}", w.word, w.idf);
        }
    }
}

#[test]
fn result_size_equals_vocabulary_size() {
    let vectorizer = TfIdfVectorizer::default();
    let vocabulary: BTreeSet<String> = vectorizer.tokenize(SAMPLE).into_iter().collect();
    assert_eq!(score(SAMPLE).len(), vocabulary.len());
}

#[test]
fn words_are_distinct_and_lexicographic() {
    let words: Vec<String> = score(SAMPLE).into_iter().map(|w| w.word).collect();
    let mut sorted = words.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(words, sorted);
}

#[test]
fn idf_never_positive() {
    for w in score(SAMPLE) {
        assert!(w.idf <= 0.0, "{} has idf {}", w.word, w.idf);
    }
}

#[test]
fn tf_is_non_negative_with_unit_norm() {
    let words = score(SAMPLE);
    assert!(words.iter().all(|w| w.tf >= 0.0));
    let norm: f64 = words.iter().map(|w| w.tf * w.tf).sum::<f64>().sqrt();
    assert!((norm - 1.0).abs() < 1e-9);
}

#[test]
fn scoring_is_idempotent() {
    assert_eq!(score(SAMPLE), score(SAMPLE));
}

#[test]
fn frequent_words_get_lower_idf() {
    let words = score(SAMPLE);
    let the = words.iter().find(|w| w.word == "the").unwrap();
    let lazy = words.iter().find(|w| w.word == "lazy").unwrap();
    assert!(the.idf < lazy.idf);
}

#[test]
fn punctuation_attached_tokens_get_zero_idf() {
    // "dog." and "fox" with trailing punctuation never equal the bare word
    let words = score("dog. dog. fox;");
    assert!(words.iter().all(|w| w.idf == 0.0));
    assert_eq!(words.len(), 2);
}

#[test]
fn large_distinct_vocabulary_scores_quickly() {
    let text: String = (0..100_000).map(|i| format!("word{i} ")).collect();
    let start = Instant::now();
    let words = score(&text);
    let elapsed = start.elapsed();

    assert_eq!(words.len(), 100_000);
    assert!(words.iter().all(|w| (w.idf - 0.5f64.ln()).abs() < 1e-12));
    assert!(elapsed < Duration::from_secs(20), "scoring took {elapsed:?}");
}

#[test]
fn stop_words_shrink_the_vocabulary() {
    let filtered = TfIdfScorer::new(VectorizerParams::default().with_english_stop_words())
        .score(SAMPLE)
        .unwrap();
    assert!(filtered.len() < score(SAMPLE).len());
    assert!(filtered.iter().all(|w| w.word != "the"));
}

// ============================================================
// calc_idf — branches
// ============================================================

#[test]
fn calc_idf_zero_count() {
    assert_eq!(calc_idf("alpha beta", "gamma", NUM_DOCUMENTS), 0.0);
}

#[test]
fn calc_idf_single_occurrence() {
    assert!((calc_idf("alpha beta", "alpha", NUM_DOCUMENTS) - 0.5f64.ln()).abs() < 1e-12);
}

#[test]
fn calc_idf_splits_on_any_whitespace() {
    let text = "tab\ttab\nnewline tab";
    assert!((calc_idf(text, "tab", NUM_DOCUMENTS) - 0.25f64.ln()).abs() < 1e-12);
}

// ============================================================
// truncate_chars — UTF-8 safety
// ============================================================

#[test]
fn truncate_short_unchanged() {
    assert_eq!(truncate_chars("word", 10), "word");
}

#[test]
fn truncate_multibyte_boundary() {
    assert_eq!(truncate_chars("привет", 3), "при...");
}
