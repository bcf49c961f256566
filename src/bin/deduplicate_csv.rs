use anyhow::Result;
use clap::Parser;
use csvtools::{
    dedup::{deduplicate_csv, DEFAULT_OUTPUT_DIR},
    logging,
};
use std::path::PathBuf;

/// Remove duplicate rows from a CSV file while preserving the header.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to input CSV file
    input_file: PathBuf,

    /// Directory for the output file
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let report = deduplicate_csv(&args.input_file, &args.output_dir)?;

    println!("Processing complete:");
    println!("Total rows: {}", report.total_rows);
    println!("Unique rows: {}", report.unique_rows);
    println!("Duplicates removed: {}", report.duplicates_removed());
    println!("Output saved to: {}", report.output_path.display());
    Ok(())
}
