//! Process command - extract data from a single invoice file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{info, warn};

use billex_core::{InvoiceRecord, extract_record};

use super::{display_filename, read_document_text};
use crate::tally;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or pre-extracted .txt)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Override the product column (default: SMS)
    #[arg(long)]
    product: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON record
    Json,
    /// Tally CSV row
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = read_document_text(&args.input)?;
    if text.trim().is_empty() {
        warn!("No text extracted from {}", args.input.display());
    }

    let filename = display_filename(&args.input);
    let extraction = extract_record(&text, &filename);

    let Some(mut record) = extraction.record else {
        // Expected steady-state outcome for out-of-scope documents.
        println!(
            "{} Unrecognized invoice layout: {}",
            style("!").yellow(),
            args.input.display()
        );
        return Ok(());
    };

    if let Some(product) = args.product {
        record.product = product;
    }

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => tally::to_csv_string(std::slice::from_ref(record)),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_record_text(record: &InvoiceRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Invoice Type:      {}\n", record.invoice_type));
    out.push_str(&format!("Invoice No:        {}\n", record.invoice_no));
    out.push_str(&format!("Invoice Date:      {}\n", record.invoice_date));
    out.push_str(&format!("GST Registration:  {}\n", record.gst_registration));
    out.push_str(&format!("GST State:         {}\n", record.gst_state));
    out.push_str(&format!("Party/Customer:    {}\n", record.party_customer));
    out.push_str(&format!("Order No:          {}\n", record.order_no));
    out.push_str(&format!(
        "Period:            {} to {}\n",
        record.invoice_period_from, record.invoice_period_to
    ));
    out.push_str(&format!("Billing Frequency: {}\n", record.billing_frequency));
    out.push_str(&format!("Ledger Name:       {}\n", record.ledger_name));
    out.push_str(&format!("Amount:            {}\n", record.amount));
    out.push_str(&format!("CGST / SGST:       {} / {}\n", record.cgst, record.sgst));
    out.push_str(&format!("Total Amount:      {}\n", record.total_amount));
    out
}
