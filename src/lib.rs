//! Spreading processes (SI, SIS, SIR and independent cascade) on fixed
//! networks, seeded once from high and once from low centrality nodes.

pub mod spread_model;
pub mod misc_types;
pub mod json_parsing;
pub mod logging;
pub mod cli_error;
pub mod compare_seeds;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
