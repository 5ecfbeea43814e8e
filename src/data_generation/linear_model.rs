// src/data_generation/linear_model.rs

use ndarray::Array1;

/// Straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    slope: f64,
    intercept: f64,
}

impl LinearModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn evaluate_array(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|v| self.evaluate(v))
    }
}


// src/data_generation/linear_model.rs
