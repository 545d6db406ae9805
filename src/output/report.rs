//! Report data assembled from a scoring run

use crate::processing::document::Document;
use crate::processing::scorer::{FitScores, LEXICAL_WEIGHT, SEMANTIC_WEIGHT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const JOB_PREVIEW_CHARS: usize = 3000;
pub const RESUME_PREVIEW_CHARS: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    StrongFit,
    PartialFit,
    WeakFit,
}

impl Verdict {
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= 75.0 {
            Verdict::StrongFit
        } else if final_score >= 50.0 {
            Verdict::PartialFit
        } else {
            Verdict::WeakFit
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::StrongFit => "Strong fit: the resume matches this job well.",
            Verdict::PartialFit => "Partial fit: the resume could be improved for this job.",
            Verdict::WeakFit => "Weak fit: the resume does not match this job.",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::StrongFit => write!(f, "strong fit"),
            Verdict::PartialFit => write!(f, "partial fit"),
            Verdict::WeakFit => write!(f, "weak fit"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub source: Option<String>,
    pub token_count: usize,
    pub character_count: usize,
    pub preview: String,
}

impl DocumentSummary {
    fn from_document(doc: &Document, preview_chars: usize) -> Self {
        Self {
            source: doc.source.clone(),
            token_count: doc.token_count(),
            character_count: doc.text.chars().count(),
            preview: doc.preview(preview_chars),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub lexical: f64,
    pub semantic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub scores: FitScores,
    pub verdict: Verdict,
    pub weights: ComponentWeights,
    pub job: DocumentSummary,
    pub resume: DocumentSummary,
    pub embedding_model: String,
    pub processing_time_ms: u64,
    pub generated_at: DateTime<Utc>,
}

impl FitReport {
    pub fn new(
        scores: FitScores,
        job: &Document,
        resume: &Document,
        embedding_model: &str,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            verdict: Verdict::from_score(scores.final_score),
            scores,
            weights: ComponentWeights {
                lexical: LEXICAL_WEIGHT,
                semantic: SEMANTIC_WEIGHT,
            },
            job: DocumentSummary::from_document(job, JOB_PREVIEW_CHARS),
            resume: DocumentSummary::from_document(resume, RESUME_PREVIEW_CHARS),
            embedding_model: embedding_model.to_string(),
            processing_time_ms,
            generated_at: Utc::now(),
        }
    }
}
