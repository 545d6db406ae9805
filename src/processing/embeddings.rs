//! Semantic similarity using Model2Vec sentence embeddings

use crate::error::{FitError, Result};
use anyhow::Context;
use log::{debug, info};
use model2vec_rs::model::StaticModel;
use std::path::Path;
use std::time::Instant;

/// Maps texts to fixed-length, unit-normalized vectors.
pub trait SentenceEmbedder: Send + Sync {
    fn encode(&self, texts: &[String]) -> Vec<Vec<f32>>;

    fn model_name(&self) -> &str;
}

/// Model2Vec static embedding model
pub struct StaticEmbedder {
    model: StaticModel,
    model_name: String,
}

impl StaticEmbedder {
    /// Load from a local model directory or a HuggingFace repo id.
    pub fn load(source: &Path) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading embedding model from: {}", source.display());

        let model = StaticModel::from_pretrained(
            source,
            None,       // token
            Some(true), // normalize
            None,       // subfolder
        )
        .with_context(|| format!("Failed to load embedding model '{}'", source.display()))?;

        info!("Model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: source.to_string_lossy().into_owned(),
        })
    }
}

impl SentenceEmbedder for StaticEmbedder {
    fn encode(&self, texts: &[String]) -> Vec<Vec<f32>> {
        self.model.encode(texts)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Scores two documents by the dot product of their embeddings.
///
/// Built once at startup; every scoring call borrows it.
pub struct SemanticScorer<E: SentenceEmbedder> {
    embedder: E,
}

impl<E: SentenceEmbedder> SemanticScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn model_name(&self) -> &str {
        self.embedder.model_name()
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn score(&self, job_text: &str, resume_text: &str) -> Result<f64> {
        let start_time = Instant::now();
        let embeddings = self
            .embedder
            .encode(&[job_text.to_string(), resume_text.to_string()]);

        let (job, resume) = match embeddings.as_slice() {
            [job, resume] => (job, resume),
            other => {
                return Err(FitError::Processing(format!(
                    "Expected 2 embeddings, model returned {}",
                    other.len()
                )))
            }
        };

        let similarity = dot_product(job, resume)?;
        debug!(
            "Semantic similarity {:.4} (dim {}) in {:.2?}",
            similarity,
            job.len(),
            start_time.elapsed()
        );

        Ok(similarity * 100.0)
    }
}

/// Dot product of two unit vectors, i.e. their cosine similarity
pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(FitError::Processing(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    Ok(a.iter().zip(b).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum())
}
