//! Integration tests for the recolor crates.
//!
//! End-to-end coverage of the extraction -> shading -> conversion ->
//! rendering path that the unit tests in each crate only exercise piecewise.
