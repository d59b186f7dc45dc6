//! Utility modules for eval-metrics.

pub mod simd;
