//! Error handling for the fit analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Job description is too short or invalid: {tokens} tokens (minimum {min})")]
    InvalidJobText { tokens: usize, min: usize },

    #[error("Resume text could not be read or is too short: {tokens} tokens (minimum {min})")]
    UnreadableOrShortResume { tokens: usize, min: usize },

    #[error("Model loading error: {0}")]
    ModelLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl FitError {
    /// Validation failures are reported to the user as-is; everything else is
    /// an operational error.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FitError::MissingInput(_)
                | FitError::InvalidJobText { .. }
                | FitError::UnreadableOrShortResume { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FitError>;

/// model2vec-rs reports load failures through anyhow
impl From<anyhow::Error> for FitError {
    fn from(err: anyhow::Error) -> Self {
        FitError::ModelLoad(err.to_string())
    }
}
