// src/data_generation/mod.rs

pub mod generator;
pub mod linear_model;

// src/data_generation/mod.rs
