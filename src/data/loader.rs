use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use super::model::{
    InternDataset, InternRecord, DATE_OF_ASSIGNMENT, DATE_OF_COMPLETION, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that stops a dataset from loading. Fatal for the current
/// rendering pass; the UI shows it and keeps running without data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("malformed data in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}, line {line}: '{value}' in column '{column}' is not a date", .path.display())]
    InvalidDate {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an intern performance table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma separated, header row required
/// * `.tsv`          – tab separated, header row required
pub fn load_file(path: &Path) -> Result<InternDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "csv" | "txt" => b',',
        "tsv" => b'\t',
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_delimited(file, delimiter, path)
}

// ---------------------------------------------------------------------------
// Delimited-text loader
// ---------------------------------------------------------------------------

/// Row shape as it sits in the file. Dates stay textual until
/// [`parse_date`] has had a look at them; unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Completion_Status")]
    completion_status: String,
    #[serde(rename = "Task_Completion_Days")]
    task_completion_days: Option<f64>,
    #[serde(rename = "Project_Quality_Score")]
    project_quality_score: Option<f64>,
    #[serde(rename = "Mentor_Feedback_Score")]
    mentor_feedback_score: Option<f64>,
    #[serde(rename = "Date of Assignment")]
    date_of_assignment: String,
    #[serde(rename = "Date of Completion")]
    date_of_completion: String,
}

/// Parse delimited text from any reader. `source_path` is only used in
/// error messages.
pub fn load_delimited<R: Read>(
    reader: R,
    delimiter: u8,
    source_path: &Path,
) -> Result<InternDataset, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: source_path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_err)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: source_path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        let line = row.position().map_or(0, |p| p.line());
        let raw: RawRecord = row.deserialize(Some(&headers)).map_err(csv_err)?;

        let date = |column: &'static str, value: &str| {
            parse_date(value).map_err(|()| LoadError::InvalidDate {
                path: source_path.to_path_buf(),
                line,
                column,
                value: value.to_string(),
            })
        };

        records.push(InternRecord {
            date_of_assignment: date(DATE_OF_ASSIGNMENT, &raw.date_of_assignment)?,
            date_of_completion: date(DATE_OF_COMPLETION, &raw.date_of_completion)?,
            department: raw.department,
            completion_status: raw.completion_status,
            task_completion_days: finite(raw.task_completion_days),
            project_quality_score: finite(raw.project_quality_score),
            mentor_feedback_score: finite(raw.mentor_feedback_score),
        });
    }

    Ok(InternDataset::from_records(records))
}

/// `NaN` and `inf` in the file mean the same thing as an empty cell.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a calendar date in one of the common spreadsheet formats.
///
/// An empty cell is a missing date (`Ok(None)`); anything else that does not
/// parse is an error.
fn parse_date(value: &str) -> Result<Option<NaiveDate>, ()> {
    if value.is_empty() {
        return Ok(None);
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Ok(Some(d));
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(Some(dt.date()));
        }
    }
    Err(())
}
