//! CSV file I/O with header validation and atomic writes
//!
//! Every data file starts with a fixed header. Reading validates that header
//! (trimmed, case-insensitive, exact order), skips blank rows and rows with
//! the wrong number of columns, and converts the remaining rows through a
//! record type. Writing always replaces the whole file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{VacationError, VacationResult};

/// Rows loaded from a CSV file
#[derive(Debug)]
pub struct CsvLoad<T> {
    /// Successfully converted rows, in file order
    pub records: Vec<T>,
    /// Rows skipped because their column count did not match the header
    pub skipped_rows: usize,
}

impl<T> CsvLoad<T> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped_rows: 0,
        }
    }
}

/// Read a CSV file into domain values
///
/// A missing or empty file yields no records. Each row is deserialized
/// positionally into `R` and converted into `T`; a conversion failure aborts
/// the load with the offending line number, so a later save never drops data
/// it could not understand.
pub fn read_csv<R, T, P>(path: P, expected_header: &[&str]) -> VacationResult<CsvLoad<T>>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = VacationError>,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "data file not found, starting empty");
        return Ok(CsvLoad::empty());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| VacationError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| VacationError::Storage(format!("Failed to read {}: {}", path.display(), e)))?
        .clone();

    if headers.is_empty() {
        debug!(path = %path.display(), "data file is empty");
        return Ok(CsvLoad::empty());
    }

    if !header_matches(&headers, expected_header) {
        return Err(VacationError::Storage(format!(
            "Invalid header in {}: expected [{}], found [{}]",
            path.display(),
            expected_header.join(", "),
            headers.iter().collect::<Vec<_>>().join(", ")
        )));
    }

    let mut load = CsvLoad::empty();

    for result in reader.records() {
        let record = result.map_err(|e| {
            VacationError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.iter().all(str::is_empty) {
            continue;
        }

        if record.len() != expected_header.len() {
            warn!(
                path = %path.display(),
                line,
                columns = record.len(),
                expected = expected_header.len(),
                "skipping row with wrong column count"
            );
            load.skipped_rows += 1;
            continue;
        }

        let row: R = record.deserialize(None).map_err(|e| {
            VacationError::Storage(format!("{}: line {}: {}", path.display(), line, e))
        })?;
        let value = T::try_from(row).map_err(|e| {
            VacationError::Storage(format!("{}: line {}: {}", path.display(), line, e))
        })?;

        load.records.push(value);
    }

    debug!(
        path = %path.display(),
        loaded = load.records.len(),
        skipped = load.skipped_rows,
        "loaded data file"
    );

    Ok(load)
}

/// Write a CSV file atomically (write to temp, then rename)
///
/// The file is either completely replaced or left untouched.
pub fn write_csv_atomic<S, I, P>(path: P, header: &[&str], rows: I) -> VacationResult<()>
where
    S: Serialize,
    I: IntoIterator<Item = S>,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            VacationError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| VacationError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer
        .write_record(header)
        .map_err(|e| VacationError::Storage(format!("Failed to write header: {}", e)))?;

    let mut count = 0usize;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| VacationError::Storage(format!("Failed to serialize row: {}", e)))?;
        count += 1;
    }

    let mut inner = writer
        .into_inner()
        .map_err(|e| VacationError::Storage(format!("Failed to flush data: {}", e)))?;

    inner
        .flush()
        .map_err(|e| VacationError::Storage(format!("Failed to flush data: {}", e)))?;

    inner
        .get_ref()
        .sync_all()
        .map_err(|e| VacationError::Storage(format!("Failed to sync data: {}", e)))?;

    drop(inner);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        VacationError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    debug!(path = %path.display(), rows = count, "saved data file");

    Ok(())
}

fn header_matches(found: &csv::StringRecord, expected: &[&str]) -> bool {
    found.len() == expected.len()
        && found
            .iter()
            .zip(expected)
            .all(|(f, e)| f.trim().eq_ignore_ascii_case(e.trim()))
}
