//! JSON report reader.
//!
//! Loads report documents from individual files or from directories of
//! per-run report files.

use super::schema::ReportDocument;
use crate::utils::error::InputError;
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Read a report from a JSON file
///
/// # Errors
/// * `InputError::ReadFailed` - File cannot be opened
/// * `InputError::JsonFailed` - File is not a valid report document
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ReportDocument, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(|source| InputError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;

    let report: ReportDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| InputError::JsonFailed {
            path: input_path.to_path_buf(),
            source,
        })?;

    debug!(
        "Report loaded: {} ({} audits)",
        report.final_url,
        report.audits.len()
    );

    Ok(report)
}

/// Read reports from a list of files and directories
///
/// Directories contribute every `*.json` file they contain, in file name
/// order. The order of the returned reports follows the order of `inputs`,
/// which is the run order the assertion engine reports `values` in.
///
/// # Errors
/// * `InputError::NoReports` - A directory holds no JSON files
/// * Any error from [`read_report`]
pub fn read_reports(inputs: &[PathBuf]) -> Result<Vec<ReportDocument>, InputError> {
    let mut reports = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let files = list_report_files(input)?;
            if files.is_empty() {
                return Err(InputError::NoReports(input.clone()));
            }
            for file in files {
                reports.push(read_report(file)?);
            }
        } else {
            reports.push(read_report(input)?);
        }
    }

    info!("Loaded {} report(s)", reports.len());
    Ok(reports)
}

/// List JSON files in a directory, sorted by file name
fn list_report_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let entries = fs::read_dir(dir).map_err(|source| InputError::ReadFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| InputError::ReadFailed {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
