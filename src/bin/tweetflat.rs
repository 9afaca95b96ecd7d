//! tweetflat: flatten tweet JSONL captures into one CSV table
//!
//! Usage:
//!   # Flatten one capture into tweets.csv
//!   tweetflat capture.jsonl
//!
//!   # Several captures, processed in order, custom output path
//!   tweetflat day1.jsonl day2.jsonl -o flat.csv
//!
//!   # Take the raw `text` key instead of the extended-text cascade
//!   tweetflat --raw-text capture.jsonl

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tweetflat::{extract_row, FlattenConfig, RowWriter, TextStrategy};

#[derive(Parser, Debug)]
#[command(name = "tweetflat")]
#[command(about = "Flatten tweet JSONL captures into one CSV table", long_about = None)]
struct Args {
    /// Input JSONL files, processed in the given order
    #[arg(value_name = "FILES", required = true)]
    inputs: Vec<String>,

    /// Output CSV file, overwritten at the start of the run
    #[arg(long, short = 'o', default_value = "tweets.csv")]
    output: String,

    /// Use the raw `text` key instead of the extended-text fallback cascade
    #[arg(long)]
    raw_text: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = FlattenConfig::default();
    if args.raw_text {
        config.text_strategy = TextStrategy::RawField;
    }

    let mut writer = RowWriter::create(&args.output)?;
    let mut total_rows = 0u64;

    // Strictly sequential: files in argument order, lines in file order.
    // The first structural error anywhere abandons the remaining files and
    // leaves the output partial.
    for input in &args.inputs {
        total_rows += process_file(input, &mut writer, &config, args.quiet)?;
    }

    writer.flush()?;

    if !args.quiet {
        eprintln!(
            "Wrote {} rows from {} file(s) to {}",
            total_rows,
            args.inputs.len(),
            args.output
        );
    }

    Ok(())
}

/// Flatten one input file, ticking a line counter as records stream by.
fn process_file(
    path: &str,
    writer: &mut RowWriter<File>,
    config: &FlattenConfig,
    quiet: bool,
) -> Result<u64> {
    let file = File::open(path).with_context(|| format!("cannot open input file: {}", path))?;
    let reader = BufReader::new(file);

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    progress.set_style(ProgressStyle::with_template(
        "{spinner} {msg} {pos:>9} lines [{elapsed_precise}]",
    )?);
    progress.set_message(path.to_string());

    let mut rows = 0u64;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("{}: failed to read line {}", path, idx + 1))?;
        progress.inc(1);
        if line.trim().is_empty() {
            continue;
        }

        let record: Value = serde_json::from_str(&line)
            .with_context(|| format!("{}: invalid JSON on line {}", path, idx + 1))?;
        let row = extract_row(&record, config.text_strategy)
            .with_context(|| format!("{}: malformed record on line {}", path, idx + 1))?;

        writer.write_row(&row)?;
        rows += 1;
    }

    progress.finish();
    Ok(rows)
}
