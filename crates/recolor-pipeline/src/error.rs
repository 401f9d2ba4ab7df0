//! Pipeline error types.

use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors raised by option validation and output rendering.
///
/// All of these are caller-input problems reported before any block is
/// processed; extraction misses are deliberately not represented here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// Brightness exponent outside (0, inf).
    #[error("brightness exponent must be a positive number (e.g., 0.8, 1.2), got {0}")]
    InvalidExponent(f64),

    /// Negative or non-finite lightness scale.
    #[error("lightness scale must be a non-negative number (e.g., 1.0, 0.75, 1.2), got {0}")]
    InvalidScale(f64),

    /// Clamp bounds outside [0, 127] or inverted.
    #[error("clamp values must be within 0..=127 with min <= max (default 2..126), got [{lmin}, {lmax}]")]
    InvalidClamp {
        /// Requested lower bound.
        lmin: u8,
        /// Requested upper bound.
        lmax: u8,
    },

    /// Array name is not a valid Java identifier.
    #[error("array name must be a valid Java identifier (e.g., GUARD_HIGHLIGHT), got {0:?}")]
    InvalidIdentifier(String),
}
