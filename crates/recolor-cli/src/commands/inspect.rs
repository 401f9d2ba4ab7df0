//! Extractor diagnostics command.

use anyhow::Result;
use recolor_extract::parse_definitions;
use tracing::info;

use crate::InspectArgs;

pub fn run(args: InspectArgs, _verbose: bool) -> Result<()> {
    let text = super::read_input(args.input.as_deref())?;
    let defs = parse_definitions(&text);
    info!(count = defs.len(), "parsed blocks");

    for (i, def) in defs.iter().enumerate() {
        let id = def
            .id
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let name = def.name.as_deref().unwrap_or("-");
        println!(
            "block {:>3}  id: {:<8}  name: {:<24}  recolorFrom: {:>3}  recolorTo: {:>3}",
            i,
            id,
            name,
            def.recolor_from.len(),
            def.recolor_to.len()
        );
    }

    if defs.is_empty() {
        eprintln!("No blocks found.");
    }
    Ok(())
}
