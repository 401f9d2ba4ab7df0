//! Plain ARGB conversion command.

use anyhow::Result;
use recolor_palette::argb_hex;
use recolor_pipeline::convert_text;
use tracing::{debug, info};

use crate::ConvertArgs;

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let text = super::read_input(args.input.as_deref())?;
    let options = args.opts.to_options();
    debug!(?options, label = %args.opts.label, "converting");

    let values = convert_text(&text, &options, &args.opts.label)?;
    info!(count = values.len(), "converted indices");

    for v in &values {
        if args.hex {
            println!("{}", argb_hex(*v));
        } else {
            println!("{v}");
        }
    }

    if verbose {
        eprintln!("Output {} ARGB value(s).", values.len());
    }
    Ok(())
}
