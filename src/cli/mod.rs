//! Command line interface for eval-metrics.

pub mod args;
pub mod commands;
pub mod demo;
pub mod output;

pub use args::*;
pub use commands::*;
pub use output::*;
