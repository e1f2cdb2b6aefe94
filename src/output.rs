use std::error::Error;
use std::io::Write;
use serde::Serialize;
use crate::collection::FileCollection;

#[derive(Serialize)]
pub struct ScanReport {
    pub total_files: usize,
    pub files: Vec<String>,
    pub extensions: Vec<String>,
}

impl ScanReport {
    pub fn from_collection(collection: &FileCollection) -> Self {
        ScanReport {
            total_files: collection.total_files(),
            files: collection
                .files()
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
            extensions: collection.extensions().map(str::to_string).collect(),
        }
    }
}

#[derive(Serialize)]
struct PathRecordCsv<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct ExtensionRecordCsv<'a> {
    extension: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

pub fn write_output<W: Write>(
    out: &mut W,
    report: &ScanReport,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => write_text_output(out, report),
        OutputFormat::Json => write_json_output(out, report),
        OutputFormat::Csv => write_csv_output(out, report),
    }
}

/// Renders `items` as `[`, one `  "item"` per line separated by commas, then `]`.
///
/// Items are quoted verbatim, without escaping.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let body = items
        .iter()
        .map(|item| format!("  \"{}\"", item.as_ref()))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("[\n{}\n]", body)
}

fn write_text_output<W: Write>(out: &mut W, report: &ScanReport) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", format_list(&report.files))?;
    writeln!(out, "{}", format_list(&report.extensions))?;
    Ok(())
}

fn write_json_output<W: Write>(out: &mut W, report: &ScanReport) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn write_csv_output<W: Write>(out: &mut W, report: &ScanReport) -> Result<(), Box<dyn Error>> {
    {
        let mut writer = csv::Writer::from_writer(&mut *out);
        if report.files.is_empty() {
            writer.write_record(["path"])?;
        }
        for path in &report.files {
            writer.serialize(PathRecordCsv { path })?;
        }
        writer.flush()?;
    }

    writeln!(out)?;

    let mut writer = csv::Writer::from_writer(&mut *out);
    if report.extensions.is_empty() {
        writer.write_record(["extension"])?;
    }
    for extension in &report.extensions {
        writer.serialize(ExtensionRecordCsv { extension })?;
    }
    writer.flush()?;
    Ok(())
}
