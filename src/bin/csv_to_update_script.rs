use anyhow::Result;
use clap::Parser;
use csvtools::{
    logging,
    sql::{csv_to_update_script, DEFAULT_KEY_COLUMN},
    table::write::write_atomic,
};
use std::path::PathBuf;
use tracing::info;

/// Turn each CSV row into `Update <table> set ... where <key> = ...;`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file to read
    csv_file: PathBuf,

    /// Table named in the generated statements
    table: String,

    /// Write the script to this file instead of stdout
    output: Option<PathBuf>,

    /// Column used in the WHERE clause
    #[arg(long, default_value = DEFAULT_KEY_COLUMN)]
    key: String,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let script = csv_to_update_script(&args.csv_file, &args.table, &args.key)?;

    match &args.output {
        Some(path) => {
            write_atomic(path, &script)?;
            info!(path = %path.display(), "script saved");
        }
        None => println!("{}", script),
    }
    Ok(())
}
