use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::vectorizer::VectorizerParams;

/// Default number of rows shown on the result page.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Default request body cap for uploads (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which stop-word list the vectorizer filters with.
#[derive(Debug, Clone, PartialEq)]
pub enum StopWords {
    /// Keep every token (default)
    None,
    /// English list from the stop-words crate
    English,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// Every value has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    /// Where uploaded files are written before scoring
    pub upload_dir: PathBuf,
    pub bind: String,
    pub port: u16,
    /// How many words the result page and /api/words return at most
    pub result_limit: usize,
    pub max_upload_bytes: usize,
    pub stop_words: StopWords,
    /// Use 1 + ln(count) instead of raw counts in the vectorizer
    pub sublinear_tf: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./tfidf.db".to_string(),
            upload_dir: PathBuf::from("./uploads"),
            bind: "127.0.0.1".to_string(),
            port: 8000,
            result_limit: DEFAULT_RESULT_LIMIT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            stop_words: StopWords::None,
            sublinear_tf: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let stop_words = match env::var("TFIDF_STOP_WORDS").as_deref() {
            Ok("english") => StopWords::English,
            Ok("") | Ok("none") | Err(_) => StopWords::None,
            Ok(other) => anyhow::bail!(
                "Unsupported TFIDF_STOP_WORDS value '{other}'. Use 'english' or leave it unset."
            ),
        };

        Ok(Self {
            db_path: env::var("TFIDF_DB_PATH").unwrap_or(defaults.db_path),
            upload_dir: env::var("TFIDF_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            bind: env::var("TFIDF_BIND").unwrap_or(defaults.bind),
            port: parse_var("TFIDF_PORT", defaults.port)?,
            result_limit: parse_var("TFIDF_RESULT_LIMIT", defaults.result_limit)?,
            max_upload_bytes: parse_var("TFIDF_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            stop_words,
            sublinear_tf: parse_var("TFIDF_SUBLINEAR_TF", defaults.sublinear_tf)?,
        })
    }

    /// Vectorizer settings derived from this config.
    pub fn vectorizer_params(&self) -> VectorizerParams {
        let params = VectorizerParams {
            sublinear_tf: self.sublinear_tf,
            ..Default::default()
        };
        match self.stop_words {
            StopWords::English => params.with_english_stop_words(),
            StopWords::None => params,
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: '{raw}'")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.result_limit, 50);
        assert_eq!(config.port, 8000);
        assert_eq!(config.stop_words, StopWords::None);
    }

    #[test]
    fn test_vectorizer_params_follow_config() {
        let config = Config {
            stop_words: StopWords::English,
            sublinear_tf: true,
            ..Default::default()
        };
        let params = config.vectorizer_params();
        assert!(params.sublinear_tf);
        assert!(!params.stop_words.is_empty());
        assert!(Config::default().vectorizer_params().stop_words.is_empty());
    }

    #[test]
    fn test_parse_var_missing_uses_default() {
        let value: usize = parse_var("TFIDF_TEST_SURELY_UNSET_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }
}
