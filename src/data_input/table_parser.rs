// src/data_input/table_parser.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data_input::sample_table::SampleTable;
use crate::error::DataError;
use crate::types::DataResult;

/// Parses a comma-delimited sample table file.
///
/// The file has no header: every non-empty line is a row of numbers. Any field that
/// does not parse as `f64` aborts the whole read, and so does a row whose length
/// differs from the first row.
pub fn read_sample_table(input_file_path: &Path) -> DataResult<SampleTable> {
    log::info!("Reading sample table from '{}'", input_file_path.display());
    let file = File::open(input_file_path)?;
    let table = parse_sample_table(BufReader::new(file))?;
    log::info!(
        "Finished reading {} rows x {} columns.",
        table.nrows(),
        table.ncols()
    );
    Ok(table)
}

/// Parses sample table text from any reader.
pub fn parse_sample_table<R: Read>(reader: R) -> DataResult<SampleTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut expected_len: Option<usize> = None;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // A line holding only whitespace comes through as a single empty field.
        if record.len() == 1 && record.get(0).is_some_and(str::is_empty) {
            continue;
        }

        let row = record
            .iter()
            .enumerate()
            .map(|(column_index, field)| {
                field.parse::<f64>().map_err(|_| DataError::Parse {
                    line,
                    column: column_index + 1,
                    value: field.to_string(),
                })
            })
            .collect::<DataResult<Vec<f64>>>()?;

        match expected_len {
            None => expected_len = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(DataError::Shape {
                    line,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }

        rows.push(row);
    }

    log::debug!("Parsed {} data rows", rows.len());
    SampleTable::from_rows(rows)
}


// src/data_input/table_parser.rs
