// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating, writing or reading sample tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}, column {column}: cannot parse '{value}' as a number")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("line {line}: expected {expected} values per row, found {found}")]
    Shape {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("sample table contains no rows")]
    EmptyTable,

    #[error("need at least {needed} rows, found {found}")]
    TooFewRows { needed: usize, found: usize },

    #[error("no finite values to plot")]
    NothingToPlot,

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("noise distribution: {0}")]
    Noise(#[from] rand_distr::NormalError),
}

/// Errors raised while creating a blog draft.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} already exists!", .0.display())]
    AlreadyExists(PathBuf),

    #[error("title is empty after normalization")]
    EmptyTitle,

    #[error("title '{0}' contains a path separator")]
    InvalidTitle(String),
}

// src/error.rs
