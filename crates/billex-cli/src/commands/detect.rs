//! Detect command - classify a document without extracting fields.

use std::path::PathBuf;

use clap::Args;
use console::style;

use billex_core::{InvoiceKind, detect_invoice_kind};

use super::read_document_text;

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Input file (PDF or pre-extracted .txt)
    #[arg(required = true)]
    input: PathBuf,

    /// Also print the extracted text
    #[arg(long)]
    show_text: bool,
}

pub async fn run(args: DetectArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = read_document_text(&args.input)?;
    let kind = detect_invoice_kind(&text);

    let marker = match kind {
        InvoiceKind::Unknown => style("!").yellow(),
        _ => style("✓").green(),
    };
    println!("{} {}: {}", marker, args.input.display(), kind);

    if args.show_text {
        println!();
        println!("{}", text);
    }

    Ok(())
}
