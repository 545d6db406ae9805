//! Output formatters for fit reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{FitReport, Verdict};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting fit reports
pub trait OutputFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String>;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_previews: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::StrongFit => Color::Green,
        Verdict::PartialFit => Color::Yellow,
        Verdict::WeakFit => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_progress_bar(&self, score: f64, width: usize) -> String {
        let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let mut output = String::new();
        let scores = &report.scores;

        output.push_str(&self.format_header("JOB & RESUME COMPATIBILITY", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.processing_time_ms
        ));

        output.push_str(&self.format_header("Results", 2));
        output.push_str(&format!(
            "{} {}\n",
            self.format_progress_bar(scores.final_score, 40),
            self.colorize(
                &format!("{:.2}% ({})", scores.final_score, report.verdict),
                verdict_color(report.verdict)
            )
        ));
        output.push_str(&format!("Final Score:    {:.2}%\n", scores.final_score));
        output.push_str(&format!(
            "TF-IDF (lexical): {:.2}% (weight: {:.0}%)\n",
            scores.lexical,
            report.weights.lexical * 100.0
        ));
        output.push_str(&format!(
            "Semantic:         {:.2}% (weight: {:.0}%)\n",
            scores.semantic,
            report.weights.semantic * 100.0
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(report.verdict.message(), verdict_color(report.verdict))
        ));

        if self.detailed {
            output.push_str(&self.format_header("Inputs", 3));
            output.push_str(&format!("Embedding model: {}\n", report.embedding_model));
            output.push_str(&format!(
                "Job description: {} tokens, {} characters\n",
                report.job.token_count, report.job.character_count
            ));
            output.push_str(&format!(
                "Resume: {} tokens, {} characters\n",
                report.resume.token_count, report.resume.character_count
            ));

            output.push_str(&self.format_header("Job Description (first 3000 characters)", 3));
            output.push_str(&report.job.preview);
            output.push('\n');

            output.push_str(&self.format_header("Resume Text (first 2000 characters)", 3));
            output.push_str(&report.resume.preview);
            output.push('\n');
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_previews: bool) -> Self {
        Self { include_previews }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let scores = &report.scores;
        let mut md = String::new();

        md.push_str("# Job & Resume Compatibility\n\n");
        md.push_str(&format!(
            "_Generated {} with `{}`_\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.embedding_model
        ));

        md.push_str("| Metric | Score | Weight |\n|---|---|---|\n");
        md.push_str(&format!("| **Final** | **{:.2}%** | |\n", scores.final_score));
        md.push_str(&format!(
            "| TF-IDF (lexical) | {:.2}% | {:.0}% |\n",
            scores.lexical,
            report.weights.lexical * 100.0
        ));
        md.push_str(&format!(
            "| Semantic | {:.2}% | {:.0}% |\n\n",
            scores.semantic,
            report.weights.semantic * 100.0
        ));

        md.push_str(&format!("**Verdict:** {}\n", report.verdict.message()));

        if self.include_previews {
            md.push_str("\n<details><summary>Job description (first 3000 characters)</summary>\n\n");
            md.push_str(&format!("```text\n{}\n```\n\n</details>\n", report.job.preview));
            md.push_str("\n<details><summary>Resume text (first 2000 characters)</summary>\n\n");
            md.push_str(&format!("```text\n{}\n```\n\n</details>\n", report.resume.preview));
        }

        Ok(md)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate_report(&self, report: &FitReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::Document;
    use crate::processing::scorer::combine;

    fn sample_report() -> FitReport {
        let job = Document::job("Senior Rust engineer building distributed systems", None);
        let resume = Document::resume("rust engineer with tokio experience", Some("cv.pdf".into()));
        FitReport::new(combine(80.0, 60.0), &job, &resume, "test-model", 42)
    }

    #[test]
    fn test_console_plain_output() {
        let output = ConsoleFormatter::new(false, false)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("Final Score:    68.00%"));
        assert!(output.contains("68.00% (partial fit)"));
        assert!(output.contains("80.00%"));
        assert!(output.contains("60.00%"));
        assert!(output.contains("Partial fit"));
        assert!(!output.contains("tokio experience"));
    }

    #[test]
    fn test_console_detailed_includes_previews() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("senior rust engineer building distributed systems"));
        assert!(output.contains("rust engineer with tokio experience"));
        assert!(output.contains("test-model"));
    }

    #[test]
    fn test_json_round_trip_fields() {
        let json = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["scores"]["final_score"], 68.0);
        assert_eq!(value["scores"]["lexical"], 80.0);
        assert_eq!(value["verdict"], "PartialFit");
        assert_eq!(value["resume"]["source"], "cv.pdf");
    }

    #[test]
    fn test_markdown_table() {
        let md = MarkdownFormatter::new(true).format_report(&sample_report()).unwrap();
        assert!(md.contains("| **Final** | **68.00%** | |"));
        assert!(md.contains("| Semantic | 60.00% | 60% |"));
        assert!(md.contains("<details>"));
    }

    #[test]
    fn test_progress_bar_clamps() {
        let formatter = ConsoleFormatter::new(false, false);
        assert_eq!(formatter.format_progress_bar(100.4, 4), "[####]");
        assert_eq!(formatter.format_progress_bar(-1.0, 4), "[----]");
    }

    #[test]
    fn test_save_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("fit.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# report");
    }
}
