//! Common utilities for integration tests

#![allow(dead_code)]

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    decaying_run,
    relative_error,
    solver_log,
    write_log,
    SOLVER_HEADER,
};
