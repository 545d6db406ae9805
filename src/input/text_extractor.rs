//! Text extraction from various file formats

use crate::error::{FitError, Result};
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(FitError::Io)?;

        self.extract_bytes(&bytes).map_err(|e| match e {
            FitError::PdfExtraction(msg) => FitError::PdfExtraction(format!("'{}': {}", path.display(), msg)),
            other => other,
        })
    }
}

impl PdfExtractor {
    /// Extract a PDF held in memory. Pages without extractable text (scanned
    /// images, blank pages) are skipped; the rest are joined by a space.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| FitError::PdfExtraction(format!("Failed to extract text from PDF: {}", e)))?;

        debug!("PDF has {} page(s)", pages.len());
        Ok(join_pages(pages))
    }
}

/// Concatenate page texts, each followed by a space, then lowercase and trim.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push(' ');
    }
    text.to_lowercase().trim().to_string()
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(FitError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(FitError::Io)?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Strip markdown syntax, keeping text with one block per line.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak => text.push(' '),
                Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_skips_empty() {
        let pages = vec!["Senior Rust Engineer", "", "   \n", "Tokio and Serde"];
        assert_eq!(join_pages(pages), "senior rust engineer tokio and serde");
    }

    #[test]
    fn test_join_pages_all_blank() {
        let pages: Vec<String> = vec![String::new(), " ".to_string()];
        assert_eq!(join_pages(pages), "");
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let result = PdfExtractor.extract_bytes(b"definitely not a pdf");
        assert!(matches!(result, Err(FitError::PdfExtraction(_))));
    }

    #[test]
    fn test_markdown_to_text() {
        let md = "# Backend Engineer\n\nWe use **Rust** and `tokio`.\n\n- Build services\n- Own *reliability*\n";
        let text = MarkdownExtractor::markdown_to_text(md);

        assert!(text.contains("Backend Engineer"));
        assert!(text.contains("We use Rust and tokio."));
        assert!(text.contains("Build services"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }
}
