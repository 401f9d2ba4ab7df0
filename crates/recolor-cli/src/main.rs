//! recolor - palette index to Java ARGB conversion CLI
//!
//! Reads definition dumps containing recolor arrays, converts the packed
//! palette indices to signed 32-bit ARGB values, and prints them either as
//! plain integers or as a ready-to-paste Java array literal.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "recolor")]
#[command(author, version, about = "Palette index to Java ARGB conversion")]
#[command(long_about = "
Converts a game's packed HSL palette indices into Java ARGB integers.

Input is free-form definition text containing brace-delimited blocks with
labeled index arrays (recolorTo by default). Read from a file, or from
stdin when FILE is omitted or '-'.

Examples:
  recolor convert npc.txt                     # One ARGB int per line
  recolor convert npc.txt --hex               # 0xFFRRGGBB form
  recolor convert npc.txt -s 0.75 --lmin 10   # Darken before conversion
  recolor convert npc.txt -e 1.2 --no-shade   # Brightness exponent only
  recolor java npc.txt --name GUARD_HIGHLIGHT --threshold 2 --model hsl
  recolor inspect npc.txt                     # Show blocks the extractor sees
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert extracted indices to ARGB integers
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Render extracted indices as a Java SearchablePixel array
    #[command(visible_alias = "j")]
    Java(JavaArgs),

    /// Show what the extractor finds in each block
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

/// Options shared by the converting commands.
#[derive(Args)]
struct ConvertOpts {
    /// Brightness exponent (pow), applied after HSL -> RGB
    #[arg(short = 'e', long)]
    exponent: Option<f64>,

    /// Lightness multiplier applied on the packed index before conversion
    #[arg(short = 's', long, default_value = "1.0")]
    scale: f64,

    /// Lower clamp for the shaded lightness field (0-127)
    #[arg(long, default_value = "2")]
    lmin: u8,

    /// Upper clamp for the shaded lightness field (0-127)
    #[arg(long, default_value = "126")]
    lmax: u8,

    /// Skip lightness shading entirely
    #[arg(long)]
    no_shade: bool,

    /// Label of the array to extract from each block
    #[arg(short, long, default_value = "recolorTo")]
    label: String,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input file ('-' or omitted for stdin)
    input: Option<PathBuf>,

    #[command(flatten)]
    opts: ConvertOpts,

    /// Print hex pixel patterns (0xFFRRGGBB) instead of decimal
    #[arg(long)]
    hex: bool,
}

#[derive(Args)]
struct JavaArgs {
    /// Input file ('-' or omitted for stdin)
    input: Option<PathBuf>,

    #[command(flatten)]
    opts: ConvertOpts,

    /// Java identifier for the generated array
    #[arg(short, long)]
    name: String,

    /// Threshold for each SingleThresholdComparator
    #[arg(short, long, default_value = "2")]
    threshold: i64,

    /// Color model tag: hsl or rgb
    #[arg(short, long, default_value = "hsl")]
    model: String,
}

#[derive(Args)]
struct InspectArgs {
    /// Input file ('-' or omitted for stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Java(args) => commands::java::run(args, cli.verbose),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
    }
}
