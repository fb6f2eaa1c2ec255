// Colored terminal output for ranked word tables.

use colored::Colorize;

use super::truncate_chars;
use crate::db::models::WordRecord;
use crate::scoring::word::ScoredWord;

/// Words wider than this are shortened in the table.
const WORD_COLUMN_CHARS: usize = 28;

/// Display stored words, already ranked, as a table.
pub fn display_word_table(words: &[WordRecord]) {
    if words.is_empty() {
        println!("No words stored yet. Upload a file or run `tfidf-upload score <file>`.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} words by IDF ===", words.len()).bold()
    );
    print_rows(words.iter().map(|w| (w.word.as_str(), w.tf, w.idf)));
}

/// Display freshly scored words, ranked by idf descending.
pub fn display_scored_words(words: &[ScoredWord], limit: usize) {
    if words.is_empty() {
        println!("No words could be extracted from this text.");
        return;
    }

    let mut ranked: Vec<&ScoredWord> = words.iter().collect();
    // Stable sort keeps vocabulary order among equal idf values
    ranked.sort_by(|a, b| b.idf.partial_cmp(&a.idf).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(limit);

    println!(
        "\n{}",
        format!(
            "=== {} distinct words, top {} by IDF ===",
            words.len(),
            ranked.len()
        )
        .bold()
    );
    print_rows(ranked.into_iter().map(|w| (w.word.as_str(), w.tf, w.idf)));
}

fn print_rows<'a>(rows: impl Iterator<Item = (&'a str, f64, f64)>) {
    println!();
    println!(
        "  {:>4}  {:<30} {:>10} {:>10}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "TF".dimmed(),
        "IDF".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());

    for (i, (word, tf, idf)) in rows.enumerate() {
        println!(
            "  {:>4}. {:<30} {:>10.6} {}",
            i + 1,
            truncate_chars(word, WORD_COLUMN_CHARS),
            tf,
            colorize_idf(idf),
        );
    }
    println!();
}

/// Rare words (idf close to zero) in green, common ones fading to dim.
fn colorize_idf(idf: f64) -> String {
    let text = format!("{idf:>10.6}");
    if idf >= -0.7 {
        text.green().to_string()
    } else if idf >= -1.4 {
        text.yellow().to_string()
    } else {
        text.dimmed().to_string()
    }
}
