//! CLI subcommands

pub mod bmi;
pub mod predict;
pub mod status;
