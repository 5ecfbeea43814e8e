// src/data_input/table_writer.rs

use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::data_input::sample_table::SampleTable;
use crate::types::DataResult;

/// Writes the table to `output_path`, one comma-delimited row per line.
///
/// Values use Rust's shortest round-trip formatting, so reading the file back
/// reproduces every value exactly. The write is not atomic.
pub fn write_sample_table(table: &SampleTable, output_path: &Path) -> DataResult<()> {
    let file = File::create(output_path)?;
    write_sample_table_to(table, file)?;
    log::info!(
        "Sample table ({} rows x {} columns) saved as '{}'.",
        table.nrows(),
        table.ncols(),
        output_path.display()
    );
    Ok(())
}

pub fn write_sample_table_to<W: Write>(table: &SampleTable, writer: W) -> DataResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}


// src/data_input/table_writer.rs
