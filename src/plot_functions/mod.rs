// src/plot_functions/mod.rs

pub mod plot_sample_summary;

// src/plot_functions/mod.rs
