// src/lib.rs - Library interface shared by the generate_data, make_plot and make_draft binaries

pub mod constants;
pub mod data_analysis;
pub mod data_generation;
pub mod data_input;
pub mod draft;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

// Expose crate version, preferring a git-derived semver when the build provides one.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
