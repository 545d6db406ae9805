//! Input manager for handling different file types

use crate::error::{FitError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::scorer::MIN_TOKENS;
use log::{info, warn};
use std::path::Path;

#[derive(Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FitError::MissingInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(FitError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(text)
    }

    /// Read a resume. Only PDF uploads are accepted.
    ///
    /// A PDF the parser cannot read yields no text, which is reported the same
    /// way as a resume that is too short.
    pub async fn extract_resume(&self, path: &Path) -> Result<String> {
        if path.exists() && self.detect_file_type(path)? != FileType::Pdf {
            return Err(FitError::UnsupportedFormat(format!(
                "Resume must be a PDF: {}",
                path.display()
            )));
        }

        match self.extract_text(path).await {
            Err(FitError::PdfExtraction(reason)) => {
                warn!("Could not read {}: {}", path.display(), reason);
                Err(FitError::UnreadableOrShortResume {
                    tokens: 0,
                    min: MIN_TOKENS,
                })
            }
            other => other,
        }
    }

    /// Read a job description from a text or markdown file.
    pub async fn extract_job(&self, path: &Path) -> Result<String> {
        if path.exists() && self.detect_file_type(path)? == FileType::Pdf {
            return Err(FitError::UnsupportedFormat(format!(
                "Job description must be text or markdown: {}",
                path.display()
            )));
        }
        self.extract_text(path).await
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| FitError::UnsupportedFormat(format!(
                "File has no extension: {}",
                path.display()
            )))?;

        Ok(FileType::from_extension(extension))
    }
}
