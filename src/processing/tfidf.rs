//! Lexical similarity: a two-document TF-IDF vector space
//!
//! Tokens are runs of two or more word characters, lowercased, with stopwords
//! removed before n-grams are formed. Term weights are raw counts scaled by a
//! smoothed idf, `ln((1 + n) / (1 + df)) + 1`, and each row is L2-normalized.

use crate::config::LexicalConfig;
use crate::error::{FitError, Result};
use crate::processing::stop_words::ENGLISH_STOP_WORDS;
use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct TfIdfConfig {
    pub max_features: usize,
    pub ngram_range: (usize, usize),
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            max_features: 6000,
            ngram_range: (1, 2),
        }
    }
}

impl From<&LexicalConfig> for TfIdfConfig {
    fn from(config: &LexicalConfig) -> Self {
        Self {
            max_features: config.max_features,
            ngram_range: (config.ngram_min, config.ngram_max),
        }
    }
}

/// Fitted vector space: vocabulary, idf weights and one L2-normalized row per document.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub vocabulary: BTreeMap<String, usize>,
    pub idf: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

pub struct TfIdfScorer {
    config: TfIdfConfig,
    token_regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl TfIdfScorer {
    pub fn new(config: TfIdfConfig) -> Result<Self> {
        let (min_n, max_n) = config.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(FitError::Configuration(format!(
                "invalid n-gram range ({}, {})",
                min_n, max_n
            )));
        }

        let token_regex = Regex::new(r"\b\w\w+\b")
            .map_err(|e| FitError::Processing(format!("Invalid token regex: {}", e)))?;

        let stop_words = ENGLISH_STOP_WORDS.iter().copied().collect();

        Ok(Self {
            config,
            token_regex,
            stop_words,
        })
    }

    /// Lowercased tokens with stopwords removed
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }

    /// Terms of a document: every n-gram in the configured range
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let (min_n, max_n) = self.config.ngram_range;
        let mut terms = Vec::new();

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }

        terms
    }

    pub fn fit_transform(&self, documents: &[&str]) -> TfIdfMatrix {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for term in self.analyze(doc) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut corpus_tf: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tf in &counts {
            for (term, &count) in tf {
                *corpus_tf.entry(term.as_str()).or_insert(0) += count;
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(&str, usize)> = corpus_tf.into_iter().collect();
        if terms.len() > self.config.max_features {
            // most frequent first, ties alphabetical
            terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            terms.truncate(self.config.max_features);
        }

        let vocabulary: BTreeMap<String, usize> = {
            let mut sorted: Vec<&str> = terms.iter().map(|(t, _)| *t).collect();
            sorted.sort_unstable();
            sorted
                .into_iter()
                .enumerate()
                .map(|(idx, term)| (term.to_string(), idx))
                .collect()
        };

        let n = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
            idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        let rows = counts
            .iter()
            .map(|tf| {
                let mut row = vec![0.0; vocabulary.len()];
                for (term, &count) in tf {
                    if let Some(&idx) = vocabulary.get(term) {
                        row[idx] = count as f64 * idf[idx];
                    }
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!("TF-IDF vocabulary size: {}", vocabulary.len());

        TfIdfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }

    /// Cosine similarity of the two documents as a percentage
    pub fn score(&self, job_text: &str, resume_text: &str) -> f64 {
        let matrix = self.fit_transform(&[job_text, resume_text]);
        cosine(&matrix.rows[0], &matrix.rows[1]) * 100.0
    }
}

fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        v.iter_mut().for_each(|x| *x /= norm);
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> TfIdfScorer {
        TfIdfScorer::new(TfIdfConfig::default()).unwrap()
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        let tokens = scorer().tokenize("The Rust engineer builds a C compiler with LLVM");
        assert_eq!(tokens, vec!["rust", "engineer", "builds", "compiler", "llvm"]);
    }

    #[test]
    fn test_bigrams_skip_removed_stop_words() {
        let terms = scorer().analyze("Kafka and Postgres");
        assert_eq!(terms, vec!["kafka", "postgres", "kafka postgres"]);
    }

    #[test]
    fn test_identical_documents() {
        let text = "distributed systems rust tokio kubernetes observability grpc";
        let score = scorer().score(text, text);
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_vocabularies() {
        let score = scorer().score(
            "kubernetes terraform golang microservices",
            "pastry bakery croissant sourdough",
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_documents_score_zero() {
        assert_eq!(scorer().score("", "rust engineer"), 0.0);
        assert_eq!(scorer().score("", ""), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds() {
        let score = scorer().score(
            "rust tokio postgres kafka kubernetes",
            "rust tokio react typescript figma",
        );
        assert!(score > 0.0 && score < 100.0);
    }

    #[test]
    fn test_idf_is_smoothed() {
        let matrix = scorer().fit_transform(&["rust python", "rust java"]);
        let shared = matrix.vocabulary["rust"];
        let only_one = matrix.vocabulary["python"];
        assert!((matrix.idf[shared] - 1.0).abs() < 1e-12);
        assert!((matrix.idf[only_one] - (1.5f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let config = TfIdfConfig {
            max_features: 2,
            ngram_range: (1, 1),
        };
        let scorer = TfIdfScorer::new(config).unwrap();
        let matrix = scorer.fit_transform(&["rust rust rust go", "rust java java zig"]);

        let terms: Vec<&str> = matrix.vocabulary.keys().map(String::as_str).collect();
        assert_eq!(terms, vec!["java", "rust"]);
    }

    #[test]
    fn test_rejects_bad_ngram_range() {
        let config = TfIdfConfig {
            ngram_range: (2, 1),
            ..TfIdfConfig::default()
        };
        assert!(TfIdfScorer::new(config).is_err());
    }
}
