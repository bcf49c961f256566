use anyhow::Result;
use clap::Parser;
use csvtools::{logging, sql::csv_column_to_tuple, table::write::write_atomic};
use std::path::PathBuf;
use tracing::info;

/// Print one CSV column as a SQL literal list, e.g. `('A', 'B')`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file to read
    csv_file: PathBuf,

    /// Column to extract, matched ignoring case and surrounding/repeated whitespace
    column: String,

    /// Write the tuple to this file instead of stdout
    output: Option<PathBuf>,

    /// Emit values without surrounding single quotes
    #[arg(long)]
    no_quotes: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let tuple = csv_column_to_tuple(&args.csv_file, &args.column, !args.no_quotes)?;

    match &args.output {
        Some(path) => {
            write_atomic(path, &tuple)?;
            info!(path = %path.display(), "result saved");
        }
        None => println!("{}", tuple),
    }
    Ok(())
}
