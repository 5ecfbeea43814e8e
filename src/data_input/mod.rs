// src/data_input/mod.rs

pub mod sample_table;
pub mod table_parser;
pub mod table_writer;

// src/data_input/mod.rs
