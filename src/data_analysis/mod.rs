// src/data_analysis/mod.rs

pub mod summary_stats;

// src/data_analysis/mod.rs
