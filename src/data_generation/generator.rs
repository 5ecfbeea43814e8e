// src/data_generation/generator.rs

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::error::Error;
use std::path::Path;

use crate::constants::{
    MODEL_INTERCEPT, MODEL_SLOPE, NOISE_MEAN, NOISE_STD, REPETITIONS, X_END, X_START, X_STEP,
};
use crate::data_generation::linear_model::LinearModel;
use crate::data_input::sample_table::SampleSet;
use crate::data_input::table_writer::write_sample_table;
use crate::error::DataError;
use crate::plot_functions::plot_sample_summary::plot_column_summary;
use crate::types::DataResult;

/// Parameters of the synthetic data set.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub slope: f64,
    pub intercept: f64,
    /// Half-open range `[x_start, x_end)` sampled every `x_step`.
    pub x_start: f64,
    pub x_end: f64,
    pub x_step: f64,
    pub repetitions: usize,
    pub noise_mean: f64,
    pub noise_std: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            slope: MODEL_SLOPE,
            intercept: MODEL_INTERCEPT,
            x_start: X_START,
            x_end: X_END,
            x_step: X_STEP,
            repetitions: REPETITIONS,
            noise_mean: NOISE_MEAN,
            noise_std: NOISE_STD,
        }
    }
}

impl GeneratorConfig {
    pub fn model(&self) -> LinearModel {
        LinearModel::new(self.slope, self.intercept)
    }

    /// Evenly spaced independent-variable values; the end point is excluded.
    pub fn independent_values(&self) -> Array1<f64> {
        Array1::range(self.x_start, self.x_end, self.x_step)
    }

    pub fn validate(&self) -> DataResult<()> {
        if !self.x_step.is_finite() || self.x_step <= 0.0 {
            return Err(DataError::InvalidConfig(format!(
                "x step must be positive, got {}",
                self.x_step
            )));
        }
        if !(self.x_start.is_finite() && self.x_end.is_finite()) || self.x_end <= self.x_start {
            return Err(DataError::InvalidConfig(format!(
                "x range [{}, {}) is empty",
                self.x_start, self.x_end
            )));
        }
        if self.repetitions == 0 {
            return Err(DataError::InvalidConfig(
                "repetitions must be at least 1".to_string(),
            ));
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(DataError::InvalidConfig(format!(
                "noise standard deviation must be finite and non-negative, got {}",
                self.noise_std
            )));
        }
        Ok(())
    }
}

/// Draws `repetitions` noisy observations of the model at every independent value.
pub fn generate_samples<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> DataResult<SampleSet> {
    config.validate()?;

    let model = config.model();
    let independent = config.independent_values();
    let clean = model.evaluate_array(&independent);
    let noise = Normal::new(config.noise_mean, config.noise_std)?;

    let observations = Array2::from_shape_fn((config.repetitions, independent.len()), |(_, col)| {
        clean[col] + noise.sample(&mut *rng)
    });

    log::debug!(
        "Generated {} repetitions at {} points (slope {}, intercept {}, noise std {})",
        config.repetitions,
        independent.len(),
        model.slope(),
        model.intercept(),
        config.noise_std
    );

    Ok(SampleSet {
        independent,
        observations,
    })
}

/// Generates a data set, optionally writes it as a sample table file and optionally
/// renders the per-column summary chart.
pub fn create_data<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    output_path: Option<&Path>,
    plot_path: Option<&Path>,
    rng: &mut R,
) -> Result<SampleSet, Box<dyn Error>> {
    let samples = generate_samples(config, rng)?;

    if let Some(path) = output_path {
        let table = samples.to_table()?;
        write_sample_table(&table, path)?;
    }

    if let Some(path) = plot_path {
        plot_column_summary(&samples, path)?;
    }

    Ok(samples)
}


// src/data_generation/generator.rs
