use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use tracing::warn;

use litmus::moderation::traits::Moderator;
use litmus::moderation::verdict::FileVerdict;

mod config;

/// Litmus: flagged-or-safe moderation checks for local files.
///
/// Reads local image and text files, ships them to a hosted moderation
/// endpoint, and reports which ones the service flags.
#[derive(Parser)]
#[command(name = "litmus", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files one at a time (one API request per file)
    Check {
        /// Paths or wildcard patterns (e.g. 'shots/*.png')
        #[arg(required = true)]
        paths: Vec<String>,

        /// Save a per-file report next to each input (<stem>.txt)
        #[arg(long)]
        save: bool,

        /// Print the raw JSON response after each verdict
        #[arg(long)]
        raw: bool,
    },

    /// Check all files together in a single API request
    Batch {
        /// Paths or wildcard patterns (e.g. 'shots/*.png')
        #[arg(required = true)]
        paths: Vec<String>,

        /// Write one combined report to this path
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Print the raw JSON response after the verdicts
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("litmus=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { paths, save, raw } => {
            let config = config::Config::load()?;
            config.require_api_key()?;

            let files = litmus::input::resolve::resolve_args(&paths);
            if files.is_empty() {
                anyhow::bail!("No input files after resolving arguments.");
            }

            println!("Checking {} file(s)...\n", files.len());

            let moderator = litmus::moderation::openai::OpenAiModerator::new(
                config.api_key.clone(),
                &config.base_url,
                config.model.clone(),
            )?;

            let mut verdicts = Vec::with_capacity(files.len());
            for file in &files {
                let item = match litmus::input::encode::content_item(file) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(path = %file.display(), error = %e, "Skipping unreadable file");
                        println!(
                            "  {:<48} {}",
                            file.display().to_string(),
                            format!("error: {e}").red()
                        );
                        verdicts.push(FileVerdict::unavailable(file));
                        continue;
                    }
                };

                let pb = spinner(format!("moderating {} ({})", file.display(), item.kind()));

                let items = vec![item];
                let verdict = match moderator.moderate(&items).await {
                    Ok(outcome) => FileVerdict::from_outcome(file, &outcome, 0),
                    Err(e) => {
                        warn!(path = %file.display(), error = %e, "Moderation call failed");
                        FileVerdict::unavailable(file)
                    }
                };
                pb.finish_and_clear();

                litmus::report::terminal::display_verdict(&verdict);
                litmus::report::terminal::display_item_preview(&items[0]);

                if raw {
                    if let Some(raw_body) = &verdict.raw {
                        litmus::report::terminal::display_raw(raw_body);
                    }
                }

                if save {
                    match litmus::report::sidecar::write_sidecar(&verdict) {
                        Ok(path) => println!(
                            "      {}",
                            format!("report saved to {}", path.display()).dimmed()
                        ),
                        Err(e) => warn!(error = %e, "Failed to save report"),
                    }
                }

                verdicts.push(verdict);
            }

            litmus::report::terminal::display_summary(&verdicts);
        }

        Commands::Batch { paths, save, raw } => {
            let config = config::Config::load()?;
            config.require_api_key()?;

            let files = litmus::input::resolve::resolve_args(&paths);
            if files.is_empty() {
                anyhow::bail!("No input files after resolving arguments.");
            }

            // Encode everything up front, skipping unreadable files so one
            // bad path doesn't sink the whole request. Verdicts are later
            // paired against the files actually submitted.
            let mut submitted: Vec<PathBuf> = Vec::new();
            let mut items = Vec::new();
            let mut skipped: Vec<FileVerdict> = Vec::new();
            for file in &files {
                match litmus::input::encode::content_item(file) {
                    Ok(item) => {
                        submitted.push(file.clone());
                        items.push(item);
                    }
                    Err(e) => {
                        warn!(path = %file.display(), error = %e, "Skipping unreadable file");
                        println!(
                            "  {:<48} {}",
                            file.display().to_string(),
                            format!("error: {e}").red()
                        );
                        skipped.push(FileVerdict::unavailable(file));
                    }
                }
            }

            if items.is_empty() {
                anyhow::bail!("None of the inputs could be read.");
            }

            println!("Submitting {} item(s) in one request...\n", items.len());

            let moderator = litmus::moderation::openai::OpenAiModerator::new(
                config.api_key.clone(),
                &config.base_url,
                config.model.clone(),
            )?;

            let pb = spinner(format!("moderating {} item(s)", items.len()));
            let mut verdicts = match moderator.moderate(&items).await {
                Ok(outcome) => litmus::moderation::verdict::pair_with_outcome(&submitted, &outcome),
                Err(e) => {
                    warn!(error = %e, "Moderation call failed");
                    submitted
                        .iter()
                        .map(|path| FileVerdict::unavailable(path))
                        .collect()
                }
            };
            pb.finish_and_clear();

            for verdict in &verdicts {
                litmus::report::terminal::display_verdict(verdict);
            }

            if raw {
                if let Some(raw_body) = verdicts.iter().find_map(|v| v.raw.as_ref()) {
                    litmus::report::terminal::display_raw(raw_body);
                }
            }

            verdicts.extend(skipped);

            if let Some(report_path) = save {
                litmus::report::sidecar::write_batch_report(&verdicts, &report_path)?;
                println!(
                    "\n{}",
                    format!("Report saved to {}", report_path.display()).bold()
                );
            }

            litmus::report::terminal::display_summary(&verdicts);
        }
    }

    Ok(())
}

/// A ticking spinner shown while a request is in flight.
fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
