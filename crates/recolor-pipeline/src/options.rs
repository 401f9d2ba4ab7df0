//! Conversion option bundle.

use crate::error::{PipelineError, PipelineResult};

/// Options recognized by the conversion pipeline.
///
/// Defaults: no brightness exponent, lightness scale 1.0 (a no-op), clamp
/// bounds 2..126, shading enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Post-conversion per-channel power; `None` disables the step.
    pub exponent: Option<f64>,
    /// Pre-conversion multiplier on the packed lightness field.
    pub lightness_scale: f64,
    /// Lower clamp on the shaded lightness field, within [0, 127].
    pub lmin: u8,
    /// Upper clamp on the shaded lightness field, within [0, 127].
    pub lmax: u8,
    /// Whether lightness shading runs at all.
    pub use_shading: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            exponent: None,
            lightness_scale: 1.0,
            lmin: 2,
            lmax: 126,
            use_shading: true,
        }
    }
}

impl Options {
    /// Validates the whole bundle.
    ///
    /// Runs before any text is processed; on failure the pipeline produces
    /// no partial output.
    pub fn validate(&self) -> PipelineResult<()> {
        if let Some(exp) = self.exponent {
            if !exp.is_finite() || exp <= 0.0 {
                return Err(PipelineError::InvalidExponent(exp));
            }
        }
        if !self.lightness_scale.is_finite() || self.lightness_scale < 0.0 {
            return Err(PipelineError::InvalidScale(self.lightness_scale));
        }
        if self.lmin > 127 || self.lmax > 127 || self.lmin > self.lmax {
            return Err(PipelineError::InvalidClamp {
                lmin: self.lmin,
                lmax: self.lmax,
            });
        }
        Ok(())
    }

    /// Lightness scale as passed to the palette crate: `None` when shading
    /// is disabled.
    pub(crate) fn effective_scale(&self) -> Option<f64> {
        self.use_shading.then_some(self.lightness_scale)
    }
}
