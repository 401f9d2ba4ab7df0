//! # recolor-pipeline
//!
//! Batch driver tying extraction and the palette transforms together:
//! definition text in, ordered signed 32-bit ARGB values out, with optional
//! rendering as a Java array literal.
//!
//! # Quick Start
//!
//! ```rust
//! use recolor_pipeline::{convert_text, Options, DEFAULT_LABEL};
//!
//! let text = "{ recolorTo: (2)[ 8115 10320 ] }";
//! let values = convert_text(text, &Options::default(), DEFAULT_LABEL).unwrap();
//! assert_eq!(values.len(), 2);
//! ```
//!
//! The option bundle is validated in full before any block is touched;
//! per-block extraction misses are skipped, never fatal.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod error;
mod java;
mod options;

pub use convert::{convert_index, convert_text, DEFAULT_LABEL};
pub use error::{PipelineError, PipelineResult};
pub use java::{render_java_array, ColorModel, JavaArraySpec};
pub use options::Options;
