//! Batch processing command for multiple invoice files.
//!
//! Files are processed sequentially in submission order; one document's
//! failure never affects another's, and output rows keep the input order.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use billex_core::{Extraction, InvoiceRecord, extract_record};

use super::{display_filename, read_document_text};
use crate::tally;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: super::process::OutputFormat,

    /// Also generate a Tally import CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Override the product column (default: SMS)
    #[arg(long)]
    product: Option<String>,
}

/// Result of processing a single file.
struct BatchOutcome {
    path: PathBuf,
    record: Option<InvoiceRecord>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        match process_single_file(&path, args.product.as_deref()) {
            Ok(extraction) => {
                outcomes.push(BatchOutcome {
                    path: path.clone(),
                    record: extraction.record,
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    outcomes.push(BatchOutcome {
                        path: path.clone(),
                        record: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Per-file outputs
    if let Some(ref output_dir) = args.output_dir {
        for outcome in &outcomes {
            let Some(record) = &outcome.record else {
                continue;
            };

            let output_name = outcome
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("invoice");

            let extension = match args.format {
                super::process::OutputFormat::Json => "json",
                super::process::OutputFormat::Csv => "csv",
                super::process::OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = super::process::format_record(record, args.format)?;
            fs::write(&output_path, content)?;
        }
    }

    // Tally import CSV over all extracted records, in input order
    if args.summary {
        let records: Vec<InvoiceRecord> = outcomes
            .iter()
            .filter_map(|o| o.record.clone())
            .collect();

        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("tally.csv"))
            .unwrap_or_else(|| PathBuf::from("tally.csv"));

        tally::write_csv(&summary_path, &records)?;
        println!(
            "{} Tally CSV written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let extracted: Vec<_> = outcomes.iter().filter(|o| o.record.is_some()).collect();
    let unrecognized: Vec<_> = outcomes
        .iter()
        .filter(|o| o.record.is_none() && o.error.is_none())
        .collect();
    let failed: Vec<_> = outcomes.iter().filter(|o| o.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted, {} unrecognized, {} failed",
        style(extracted.len()).green(),
        style(unrecognized.len()).yellow(),
        style(failed.len()).red()
    );

    if !unrecognized.is_empty() {
        println!();
        println!("{}", style("Unrecognized layouts:").yellow());
        for outcome in &unrecognized {
            println!("  - {}", outcome.path.display());
        }
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: &PathBuf, product: Option<&str>) -> anyhow::Result<Extraction> {
    let text = read_document_text(path)?;
    if text.trim().is_empty() {
        warn!("No text extracted from {}", path.display());
    }

    let filename = display_filename(path);
    let mut extraction = extract_record(&text, &filename);

    if let (Some(record), Some(product)) = (extraction.record.as_mut(), product) {
        record.product = product.to_string();
    }

    Ok(extraction)
}
