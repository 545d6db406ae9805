//! Document structures for the two sides of a scoring run

use crate::processing::normalizer::{normalize, token_count};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentRole {
    JobDescription,
    Resume,
}

impl std::fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentRole::JobDescription => write!(f, "Job Description"),
            DocumentRole::Resume => write!(f, "Resume"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub role: DocumentRole,
    pub raw: String,
    pub text: String,
    pub source: Option<String>,
}

impl Document {
    /// Job descriptions are pasted from web pages and go through the boilerplate filter.
    pub fn job(raw: impl Into<String>, source: Option<String>) -> Self {
        let raw = raw.into();
        let text = normalize(&raw);
        Self {
            role: DocumentRole::JobDescription,
            raw,
            text,
            source,
        }
    }

    /// Resume text comes from the PDF extractor and is only case folded and trimmed.
    pub fn resume(raw: impl Into<String>, source: Option<String>) -> Self {
        let raw = raw.into();
        let text = raw.to_lowercase().trim().to_string();
        Self {
            role: DocumentRole::Resume,
            raw,
            text,
            source,
        }
    }

    pub fn token_count(&self) -> usize {
        token_count(&self.text)
    }

    pub fn preview(&self, max_chars: usize) -> String {
        preview(&self.text, max_chars)
    }
}

/// The first `max_chars` characters, cut on a grapheme boundary.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut taken = 0;
    let mut end = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let len = grapheme.chars().count();
        if taken + len > max_chars {
            break;
        }
        taken += len;
        end = idx + grapheme.len();
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_is_normalized() {
        let doc = Document::job("  Senior Engineer | LinkedIn  ", None);
        assert_eq!(doc.text, "senior engineer |");
        assert_eq!(doc.role, DocumentRole::JobDescription);
        assert_eq!(doc.token_count(), 3);
    }

    #[test]
    fn test_boilerplate_job_keeps_raw_text() {
        let doc = Document::job("LinkedIn | Sign in", None);
        assert_eq!(doc.raw, "LinkedIn | Sign in");
        assert_eq!(doc.text, "|");
        assert_eq!(doc.role.to_string(), "Job Description");
    }

    #[test]
    fn test_resume_keeps_denylisted_words() {
        let doc = Document::resume("Terms of Service Engineer", Some("cv.pdf".into()));
        assert_eq!(doc.text, "terms of service engineer");
    }

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("çerez gizlilik", 5), "çerez");
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("", 10), "");
    }

    #[test]
    fn test_preview_does_not_split_graphemes() {
        // "e" followed by a combining acute accent is one grapheme of two chars
        let text = "cafe\u{301} bar";
        assert_eq!(preview(text, 4), "caf");
        assert_eq!(preview(text, 5), "cafe\u{301}");
    }
}
