use crate::error::AppError;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The point coordinates accumulated from the input file.
///
/// `xs` and `ys` are index-aligned: `xs[k]` and `ys[k]` are field 0 and
/// field 1 of the `k`-th kept row, in original file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Samples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Reads the CSV file at `path` into a `Samples`, keeping only rows whose
/// zero-based index is divisible by `stride`.
///
/// The stride test is applied before parsing, so a malformed row at a
/// skipped index does not abort the run. Any failure on a kept row (too few
/// fields, non-numeric field) aborts the whole run with nothing accumulated
/// for the caller. The file handle is scoped to this function and released
/// on every exit path.
///
/// One line is one row. The file is read line-wise because the `csv`
/// crate's record iterator silently drops blank lines, which must count
/// toward the row index and, when kept, abort the run as too short.
pub fn load_samples(path: &Path, stride: u64) -> Result<Samples, AppError> {
    let file = File::open(path).map_err(|source| AppError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut samples = Samples::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i as u64 % stride != 0 {
            continue;
        }
        let record = split_row(&line)?;
        samples.xs.push(parse_field(&record, i, 0)?);
        samples.ys.push(parse_field(&record, i, 1)?);
    }

    log::debug!(
        "kept {} rows from '{}' at stride {}",
        samples.len(),
        path.display(),
        stride
    );

    Ok(samples)
}

/// Splits one line into comma-separated fields. A blank line yields an
/// empty record.
fn split_row(line: &str) -> Result<StringRecord, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

/// Parses one field of a kept row as `f64`, trimming surrounding whitespace.
fn parse_field(record: &StringRecord, row: usize, field: usize) -> Result<f64, AppError> {
    let raw = record.get(field).ok_or(AppError::RowTooShort {
        row,
        found: record.len(),
    })?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::NumericFormat {
            row,
            field,
            value: raw.to_string(),
        })
}
