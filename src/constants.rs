// src/constants.rs

use plotters::style::colors::full_palette::GREEN;
use plotters::style::RGBColor;

// --- Linear Model ---
pub const MODEL_SLOPE: f64 = 3.0;
pub const MODEL_INTERCEPT: f64 = 0.0;

// --- Independent Variable Sequence (half-open range) ---
pub const X_START: f64 = 4.0;
pub const X_END: f64 = 12.0;
pub const X_STEP: f64 = 1.0;

// --- Noise ---
pub const REPETITIONS: usize = 5;
pub const NOISE_MEAN: f64 = 0.0;
pub const NOISE_STD: f64 = 6.0;

// Default file names used when the binaries are run without arguments.
pub const DEFAULT_SAMPLE_FILE: &str = "sample_data.csv";
pub const DEFAULT_PLOT_FILE: &str = "sample_data_plot.png";

// Drafts live in this directory next to the make_draft executable.
pub const DRAFTS_DIR_NAME: &str = "_drafts";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 960;

// --- Plot Labels ---
pub const PLOT_TITLE: &str = "Some Noisy Data with a linear trend";
pub const X_AXIS_LABEL: &str = "Simulated Independent Variable (units)";
pub const Y_AXIS_LABEL: &str = "Simulated Dependent Variable, (units)";
pub const SERIES_LABEL: &str = "Some description of data";

// --- Plot Color Assignments ---
pub const COLOR_ERROR_BAR: &RGBColor = &GREEN;

// Error bar styling (pixels).
pub const ERROR_BAR_CAP_WIDTH_PX: u32 = 6;
pub const LINE_WIDTH_ERROR_BAR: u32 = 2;
pub const MARKER_RADIUS_PX: i32 = 4;

// Fraction of the data span added on both sides of each axis.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
// Padding used when the data span is (almost) zero.
pub const RANGE_PADDING_MIN: f64 = 0.5;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 16;

// src/constants.rs
