//! Java array rendering command.

use anyhow::{anyhow, Result};
use recolor_pipeline::{convert_text, render_java_array, ColorModel, JavaArraySpec};
use tracing::info;

use crate::JavaArgs;

pub fn run(args: JavaArgs, verbose: bool) -> Result<()> {
    let color_model: ColorModel = args.model.parse().map_err(|e: String| anyhow!(e))?;

    let text = super::read_input(args.input.as_deref())?;
    let options = args.opts.to_options();
    let values = convert_text(&text, &options, &args.opts.label)?;
    info!(count = values.len(), name = %args.name, "rendering Java array");

    let spec = JavaArraySpec {
        name: args.name,
        threshold: args.threshold,
        color_model,
    };
    println!("{}", render_java_array(&values, &spec)?);

    if verbose {
        eprintln!("Rendered array with {} entr(ies).", values.len());
    }
    Ok(())
}
