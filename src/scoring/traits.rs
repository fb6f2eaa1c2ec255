// Word scorer trait — the seam between the web shell and the scoring math.
//
// The shell only needs "text in, scored words out". The default
// implementation is TfIdfScorer; tests and the CLI use the same trait.

use super::word::ScoredWord;
use anyhow::Result;

/// Trait for scoring every distinct word of a single document.
pub trait WordScorer: Send + Sync {
    /// Score the words of `text`, one entry per vocabulary term.
    fn score(&self, text: &str) -> Result<Vec<ScoredWord>>;
}
