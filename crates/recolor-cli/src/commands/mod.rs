//! Command implementations.

pub mod convert;
pub mod inspect;
pub mod java;

use anyhow::{Context, Result};
use recolor_pipeline::Options;
use std::io::Read;
use std::path::Path;

use crate::ConvertOpts;

/// Reads the definition text from a file, or stdin for `-`/no path.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

impl ConvertOpts {
    /// Builds the pipeline option bundle; validation happens in the pipeline.
    pub fn to_options(&self) -> Options {
        Options {
            exponent: self.exponent,
            lightness_scale: self.scale,
            lmin: self.lmin,
            lmax: self.lmax,
            use_shading: !self.no_shade,
        }
    }
}
