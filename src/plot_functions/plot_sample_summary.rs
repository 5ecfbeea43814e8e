// src/plot_functions/plot_sample_summary.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_ERROR_BAR, PLOT_TITLE, SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::data_analysis::summary_stats::{column_statistics, row_statistics};
use crate::data_input::sample_table::{SampleSet, SampleTable};
use crate::error::DataError;
use crate::plot_framework::{draw_error_bar_plot, error_bar_ranges, ErrorBarPlotConfig};
use crate::types::{DataResult, ErrorBarPoint};

fn error_bar_config(points: Vec<ErrorBarPoint>) -> DataResult<ErrorBarPlotConfig> {
    let (x_range, y_range) = error_bar_ranges(&points).ok_or(DataError::NothingToPlot)?;

    Ok(ErrorBarPlotConfig {
        title: PLOT_TITLE.to_string(),
        x_range,
        y_range,
        points,
        label: SERIES_LABEL.to_string(),
        color: *COLOR_ERROR_BAR,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
    })
}

/// Chart of each row's mean against its position in the file, with the row's
/// standard deviation as the error bar. The first row is treated like any other.
pub fn build_row_summary_plot(table: &SampleTable) -> DataResult<ErrorBarPlotConfig> {
    let stats = row_statistics(table)?;
    error_bar_config(stats.error_bar_points(&table.row_index()))
}

/// Chart of each column's mean across repetitions against the independent variable.
pub fn build_column_summary_plot(samples: &SampleSet) -> DataResult<ErrorBarPlotConfig> {
    let stats = column_statistics(&samples.observations)?;
    if stats.len() != samples.independent.len() {
        return Err(DataError::Shape {
            line: 1,
            expected: samples.independent.len(),
            found: stats.len(),
        });
    }
    error_bar_config(stats.error_bar_points(&samples.independent))
}

/// Generates the row-summary error-bar plot for a sample table loaded from disk.
pub fn plot_row_summary(table: &SampleTable, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let plot_config = build_row_summary_plot(table)?;
    draw_error_bar_plot(output_path, &plot_config)
}

/// Generates the column-summary error-bar plot for freshly generated samples.
pub fn plot_column_summary(samples: &SampleSet, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let plot_config = build_column_summary_plot(samples)?;
    draw_error_bar_plot(output_path, &plot_config)
}


// src/plot_functions/plot_sample_summary.rs
