//! fit-analyzer: hybrid job description and resume compatibility scoring

use clap::Parser;
use fit_analyzer::cli::{self, Cli, Commands, ConfigAction};
use fit_analyzer::config::Config;
use fit_analyzer::error::{FitError, Result};
use fit_analyzer::input::InputManager;
use fit_analyzer::output::{save_report_to_file, FitReport, ReportGenerator};
use fit_analyzer::processing::document::Document;
use fit_analyzer::processing::embeddings::{SemanticScorer, StaticEmbedder};
use fit_analyzer::processing::scorer::HybridScorer;
use fit_analyzer::processing::tfidf::{TfIdfConfig, TfIdfScorer};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        if e.is_validation() {
            eprintln!("❌ {}", e);
            process::exit(2);
        }
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            job_text,
            embedding,
            output,
            detailed,
            save,
        } => {
            let resume = resume.ok_or_else(|| FitError::MissingInput("no resume uploaded".to_string()))?;
            if job.is_none() && job_text.as_deref().map_or(true, str::is_empty) {
                return Err(FitError::MissingInput("job description is empty".to_string()));
            }

            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| FitError::UnsupportedFormat(format!("Resume file: {}", e)))?;
            if let Some(job) = &job {
                cli::validate_file_extension(job, &["txt", "md", "markdown"])
                    .map_err(|e| FitError::UnsupportedFormat(format!("Job description file: {}", e)))?;
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(FitError::Configuration)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            // Model load failures are fatal, so load before reading any input.
            let model_source = match embedding {
                Some(name) => PathBuf::from(name),
                None => config.embedding_model_source(),
            };
            let spinner = new_spinner("Loading embedding model...");
            let embedder = StaticEmbedder::load(&model_source);
            spinner.finish_and_clear();
            let semantic = SemanticScorer::new(embedder?);

            let lexical = TfIdfScorer::new(TfIdfConfig::from(&config.lexical))?;
            let scorer = HybridScorer::new(lexical, &semantic);

            let started = Instant::now();
            let input_manager = InputManager::new();

            let job_doc = match (job, job_text) {
                (Some(path), _) => {
                    let raw = input_manager.extract_job(&path).await?;
                    Document::job(raw, Some(path.display().to_string()))
                }
                (None, Some(text)) => Document::job(text, None),
                (None, None) => {
                    return Err(FitError::MissingInput("job description is empty".to_string()))
                }
            };

            let resume_text = input_manager.extract_resume(&resume).await?;
            let resume_doc = Document::resume(resume_text, Some(resume.display().to_string()));

            let spinner = new_spinner("Computing hybrid compatibility...");
            let scores = scorer.score(&job_doc, &resume_doc);
            spinner.finish_and_clear();
            let scores = scores?;

            let elapsed = started.elapsed().as_millis() as u64;
            info!("Scoring finished in {}ms", elapsed);

            let report = FitReport::new(scores, &job_doc, &resume_doc, scorer.model_name(), elapsed);
            let generator = ReportGenerator::with_options(config.output.color_output, detailed);
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("{}", rendered);

            if let Some(path) = save {
                // Colors are for terminals only
                let plain = ReportGenerator::with_options(false, detailed)
                    .generate_report(&report, &output_format)?;
                save_report_to_file(&plain, &path)?;
                println!("💾 Report saved to {}", path.display());
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                None | Some(ConfigAction::Show) => {
                    println!("📁 Config file: {}", path.display());
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| FitError::Configuration(format!("Failed to serialize config: {}", e)))?;
                    println!("{}", content);
                }

                Some(ConfigAction::Init { force }) => {
                    if path.exists() && !force {
                        return Err(FitError::Configuration(format!(
                            "{} already exists (use --force to overwrite)",
                            path.display()
                        )));
                    }
                    Config::default().save_to(&path)?;
                    println!("✅ Default configuration written to {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn new_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
