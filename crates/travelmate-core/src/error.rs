// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelError {
    /// A query (or recommender setting) the core refuses to evaluate.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// A catalog row that failed validation. `row` is the 1-based data row;
    /// 0 means the header (or an in-memory record without a row number).
    #[error("Invalid record at row {row}: field '{field}' {reason}")]
    InvalidRecord {
        row: usize,
        field: String,
        reason: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TravelError {
    pub(crate) fn invalid_record(row: usize, field: &str, reason: impl Into<String>) -> Self {
        TravelError::InvalidRecord {
            row,
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
