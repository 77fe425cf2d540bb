use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot open input file '{path}'")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV input")]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected at least two fields, found {found}")]
    RowTooShort { row: usize, found: usize },

    #[error("row {row}, field {field}: '{value}' is not a number")]
    NumericFormat {
        row: usize,
        field: usize,
        value: String,
    },

    // eframe::Error is not Send + Sync, so the failure is carried as text
    // to keep AppError usable behind anyhow::Context.
    #[error("display backend failed: {0}")]
    Display(String),
}
