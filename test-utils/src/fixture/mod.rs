//! Fixed test data shared across test modules.

pub mod config;
