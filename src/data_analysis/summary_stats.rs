// src/data_analysis/summary_stats.rs

use ndarray::{Array1, Array2, Axis};

use crate::data_input::sample_table::SampleTable;
use crate::error::DataError;
use crate::types::{DataResult, ErrorBarPoint};

/// Mean and population standard deviation (ddof = 0) along one axis of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl SummaryStats {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Pairs each statistic with its x coordinate for error-bar rendering.
    pub fn error_bar_points(&self, x: &Array1<f64>) -> Vec<ErrorBarPoint> {
        x.iter()
            .zip(self.mean.iter())
            .zip(self.std.iter())
            .map(|((&x, &mean), &std)| (x, mean, std))
            .collect()
    }
}

fn stats_along(data: &Array2<f64>, axis: Axis) -> DataResult<SummaryStats> {
    // mean_axis is None when the reduced axis is empty.
    let mean = data.mean_axis(axis).ok_or(DataError::EmptyTable)?;
    let std = data.std_axis(axis, 0.0);
    Ok(SummaryStats { mean, std })
}

/// Statistics of each row across its columns (one entry per row).
pub fn row_statistics(table: &SampleTable) -> DataResult<SummaryStats> {
    let stats = stats_along(table.as_array(), Axis(1))?;
    log::debug!("Row means: {:?}", stats.mean);
    Ok(stats)
}

/// Statistics of each column across the repeated observation rows (one entry per column).
pub fn column_statistics(observations: &Array2<f64>) -> DataResult<SummaryStats> {
    if observations.nrows() == 0 || observations.ncols() == 0 {
        return Err(DataError::EmptyTable);
    }
    let stats = stats_along(observations, Axis(0))?;
    log::debug!("Column means: {:?}", stats.mean);
    Ok(stats)
}


// src/data_analysis/summary_stats.rs
