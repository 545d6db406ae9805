//! Hybrid scoring: validation gate, lexical and semantic scores, weighted combination

use crate::error::{FitError, Result};
use crate::processing::document::Document;
use crate::processing::embeddings::{SemanticScorer, SentenceEmbedder};
use crate::processing::normalizer::token_count;
use crate::processing::tfidf::TfIdfScorer;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const LEXICAL_WEIGHT: f64 = 0.4;
pub const SEMANTIC_WEIGHT: f64 = 0.6;
/// Minimum whitespace tokens for either document
pub const MIN_TOKENS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitScores {
    pub final_score: f64,
    pub lexical: f64,
    pub semantic: f64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted sum of the unrounded component scores. Each field is rounded to
/// two decimals independently.
pub fn combine(lexical: f64, semantic: f64) -> FitScores {
    FitScores {
        final_score: round2(LEXICAL_WEIGHT * lexical + SEMANTIC_WEIGHT * semantic),
        lexical: round2(lexical),
        semantic: round2(semantic),
    }
}

/// Reject inputs that are missing or too short. The job description is checked first.
///
/// Missing means nothing was supplied at all. A job description that normalizes
/// to nothing (only boilerplate or whitespace) is too short, not missing.
pub fn validate(job: &Document, resume: &Document) -> Result<()> {
    if job.raw.is_empty() {
        return Err(FitError::MissingInput("job description is empty".to_string()));
    }

    let job_tokens = token_count(&job.text);
    if job_tokens < MIN_TOKENS {
        return Err(FitError::InvalidJobText {
            tokens: job_tokens,
            min: MIN_TOKENS,
        });
    }

    let resume_tokens = token_count(&resume.text);
    if resume_tokens < MIN_TOKENS {
        return Err(FitError::UnreadableOrShortResume {
            tokens: resume_tokens,
            min: MIN_TOKENS,
        });
    }

    Ok(())
}

pub struct HybridScorer<'m, E: SentenceEmbedder> {
    lexical: TfIdfScorer,
    semantic: &'m SemanticScorer<E>,
}

impl<'m, E: SentenceEmbedder> HybridScorer<'m, E> {
    pub fn new(lexical: TfIdfScorer, semantic: &'m SemanticScorer<E>) -> Self {
        Self { lexical, semantic }
    }

    pub fn model_name(&self) -> &str {
        self.semantic.model_name()
    }

    pub fn score(&self, job: &Document, resume: &Document) -> Result<FitScores> {
        validate(job, resume)?;

        info!(
            "Scoring {} ({} tokens) against {} ({} tokens)",
            job.role,
            job.token_count(),
            resume.role,
            resume.token_count()
        );

        let lexical = self.lexical.score(&job.text, &resume.text);
        let semantic = self.semantic.score(&job.text, &resume.text)?;
        debug!("Raw scores: lexical={:.4} semantic={:.4}", lexical, semantic);

        Ok(combine(lexical, semantic))
    }
}
