//! Shared utilities for the veOLAS vote planner.

pub mod logging;

pub use logging::{init_logging, LogFormat};
