//! Output formatting module
//! Builds fit reports and renders them for the console, JSON and Markdown

pub mod formatter;
pub mod report;

pub use formatter::{save_report_to_file, OutputFormatter, ReportGenerator};
pub use report::{FitReport, Verdict};
