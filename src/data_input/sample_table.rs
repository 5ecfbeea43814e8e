// src/data_input/sample_table.rs

use ndarray::{s, Array1, Array2, ArrayView1, Axis};

use crate::error::DataError;
use crate::types::DataResult;

/// Rectangular table of floating-point samples as exchanged through the text format.
///
/// Every row has the same length and the table holds at least one row with at least
/// one value. The only way to build one is through the validating constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    data: Array2<f64>,
}

impl SampleTable {
    /// Builds a table from parsed rows, rejecting ragged or empty input.
    ///
    /// Shape errors report a 1-based row number.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> DataResult<Self> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(DataError::EmptyTable),
        };

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(DataError::Shape {
                    line: row_index as u64 + 1,
                    expected,
                    found: row.len(),
                });
            }
        }

        let nrows = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let flat_len = flat.len();
        let data = Array2::from_shape_vec((nrows, expected), flat).map_err(|_| DataError::Shape {
            line: nrows as u64,
            expected: nrows * expected,
            found: flat_len,
        })?;
        Ok(Self { data })
    }

    pub fn from_array(data: Array2<f64>) -> DataResult<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(DataError::EmptyTable);
        }
        Ok(Self { data })
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.axis_iter(Axis(0))
    }

    /// Positional index `0..nrows` used as the x axis when the file carries no schema.
    pub fn row_index(&self) -> Array1<f64> {
        Array1::from_iter((0..self.nrows()).map(|i| i as f64))
    }

    /// Reinterprets the table with its first row as the independent variable.
    pub fn into_sample_set(self) -> DataResult<SampleSet> {
        if self.nrows() < 2 {
            // One independent-variable row plus at least one observation row.
            return Err(DataError::TooFewRows {
                needed: 2,
                found: self.nrows(),
            });
        }
        let independent = self.data.row(0).to_owned();
        let observations = self.data.slice(s![1.., ..]).to_owned();
        Ok(SampleSet {
            independent,
            observations,
        })
    }
}

/// Sample table with an explicit schema: the independent variable is kept apart
/// from the repeated observations taken at those points.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub independent: Array1<f64>,
    /// One row per repetition, one column per independent-variable point.
    pub observations: Array2<f64>,
}

impl SampleSet {
    pub fn repetitions(&self) -> usize {
        self.observations.nrows()
    }

    /// Flattens into the on-disk layout: independent values first, then each observation row.
    pub fn to_table(&self) -> DataResult<SampleTable> {
        if self.observations.ncols() != self.independent.len() {
            return Err(DataError::Shape {
                line: 2,
                expected: self.independent.len(),
                found: self.observations.ncols(),
            });
        }
        let header = self.independent.view().insert_axis(Axis(0));
        let data = ndarray::concatenate(Axis(0), &[header, self.observations.view()]).map_err(
            |_| DataError::Shape {
                line: 2,
                expected: self.independent.len(),
                found: self.observations.ncols(),
            },
        )?;
        SampleTable::from_array(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_rows_builds_rectangular_table() {
        let table = SampleTable::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
            .unwrap();
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.as_array()[[2, 1]], 6.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = SampleTable::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        match err {
            DataError::Shape {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_rows_rejects_empty_input() {
        assert!(matches!(
            SampleTable::from_rows(Vec::new()),
            Err(DataError::EmptyTable)
        ));
        assert!(matches!(
            SampleTable::from_rows(vec![vec![]]),
            Err(DataError::EmptyTable)
        ));
    }

    #[test]
    fn test_row_index_is_positional() {
        let table = SampleTable::from_rows(vec![vec![7.0], vec![8.0], vec![9.0]]).unwrap();
        assert_eq!(table.row_index(), array![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sample_set_table_layout() {
        let set = SampleSet {
            independent: array![4.0, 5.0],
            observations: array![[12.5, 14.0], [11.0, 16.5]],
        };
        let table = set.to_table().unwrap();
        assert_eq!(
            table.as_array(),
            &array![[4.0, 5.0], [12.5, 14.0], [11.0, 16.5]]
        );

        let back = table.into_sample_set().unwrap();
        assert_eq!(back, set);
        assert_eq!(back.repetitions(), 2);
    }

    #[test]
    fn test_into_sample_set_needs_two_rows() {
        let table = SampleTable::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        match table.into_sample_set() {
            Err(DataError::TooFewRows { needed, found }) => {
                assert_eq!(needed, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected TooFewRows, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_sample_set_is_a_shape_error() {
        let set = SampleSet {
            independent: array![4.0, 5.0, 6.0],
            observations: array![[12.0, 15.0]],
        };
        assert!(matches!(
            set.to_table(),
            Err(DataError::Shape {
                line: 2,
                expected: 3,
                found: 2
            })
        ));
    }
}

// src/data_input/sample_table.rs
