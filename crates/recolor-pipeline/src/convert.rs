//! Text-to-ARGB batch conversion.

use recolor_extract::{find_labeled_array, split_brace_blocks};
use recolor_palette::{argb, index_to_rgb8, shade_lightness};

use crate::error::PipelineResult;
use crate::options::Options;

/// Label the pipeline extracts by default.
pub const DEFAULT_LABEL: &str = "recolorTo";

/// Converts one packed index to a signed ARGB value under `options`.
///
/// Assumes `options` has already been validated.
pub fn convert_index(packed: u16, options: &Options) -> i32 {
    let shaded = shade_lightness(packed, options.effective_scale(), options.lmin, options.lmax);
    let (r, g, b) = index_to_rgb8(shaded, options.exponent);
    argb(r, g, b)
}

/// Converts every labeled index found in `text` to signed ARGB values.
///
/// The option bundle is validated first; on failure nothing is processed.
/// Blocks are then scanned in order of appearance, and within each block the
/// `label` array is extracted. Blocks without the label contribute zero
/// values and conversion continues, so a single malformed block never aborts
/// the batch.
///
/// # Example
///
/// ```rust
/// use recolor_pipeline::{convert_text, Options, DEFAULT_LABEL};
///
/// let values = convert_text(
///     "{ recolorTo: (1)[ 65535 ] }",
///     &Options { use_shading: false, ..Options::default() },
///     DEFAULT_LABEL,
/// ).unwrap();
/// assert_eq!(values.len(), 1);
/// assert_eq!((values[0] as u32) >> 24, 0xFF);
/// ```
pub fn convert_text(text: &str, options: &Options, label: &str) -> PipelineResult<Vec<i32>> {
    options.validate()?;
    let mut out = Vec::new();
    for block in split_brace_blocks(text) {
        let Some(indices) = find_labeled_array(label, block) else {
            continue;
        };
        out.extend(indices.into_iter().map(|idx| convert_index(idx, options)));
    }
    Ok(out)
}
