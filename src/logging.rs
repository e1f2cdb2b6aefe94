use std::fs::{self, File};
use std::io;
use std::path::Path;
use chrono::Local;
use log::LevelFilter;

/// Maps the number of `-v` flags to a log level. Warnings are always shown.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sends log records to stderr, and to `log_file` when given. Stdout is left to the report.
pub fn init_logging(verbose: u8, log_file: Option<&Path>) -> io::Result<()> {
    let mut config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for("file_search", level_for_verbosity(verbose))
        .chain(io::stderr());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        config = config.chain(File::create(path)?);
    }

    config.apply().map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize logging: {}", e),
        )
    })
}
