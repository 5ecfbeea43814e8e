// src/types.rs
// Type aliases shared across modules

use crate::error::{DataError, DraftError};

pub type DataResult<T> = Result<T, DataError>;
pub type DraftResult<T> = Result<T, DraftError>;

// One error-bar point: (x, mean, standard deviation).
pub type ErrorBarPoint = (f64, f64, f64);

// Plot axis ranges as consumed by plotters' cartesian builder.
pub type AxisRange = std::ops::Range<f64>;
