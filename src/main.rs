mod collection;
mod extension;
mod logging;
mod output;
mod scan;

use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use output::{OutputFormat, ScanReport};
use scan::scan_directory;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to search
    #[arg(short, long, env = "FILE_SEARCH_ROOT")]
    path: PathBuf,

    /// Output format (text, json, or csv)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let format = OutputFormat::from_str(&args.format).ok_or_else(|| {
        format!("Invalid output format: '{}'. Valid formats are: text, json, csv", args.format)
    })?;

    logging::init_logging(args.verbose, args.log_file.as_deref())?;

    match scan_directory(&args.path) {
        Ok(collection) => {
            let report = ScanReport::from_collection(&collection);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            output::write_output(&mut out, &report, format)?;
            out.flush()?;
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
