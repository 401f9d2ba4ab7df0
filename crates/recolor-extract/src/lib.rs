//! # recolor-extract
//!
//! Pulls packed palette indices out of loosely structured definition text.
//!
//! The dumps this crate reads look like:
//!
//! ```text
//! (12){
//! id: 11904
//! name: "Guard"
//! recolorFrom: (5)[
//! 43072
//! 926
//! 5648
//! 61
//! 11200
//! ]
//! recolorTo: (5)[
//! 8115
//! 8115
//! 8596
//! 10320
//! 8115
//! ]
//! }
//! ```
//!
//! Each top-level brace-balanced span is one block; inside a block, labeled
//! arrays carry the packed indices, optionally prefixed by a parenthesized
//! count that is ignored. Everything here is permissive by design: labels
//! that do not match, tokens out of the 16-bit range, and unbalanced braces
//! all yield "no result" rather than errors, so one malformed block never
//! aborts a batch.
//!
//! # Quick Start
//!
//! ```rust
//! use recolor_extract::{split_brace_blocks, find_labeled_array};
//!
//! let text = "{ recolorTo: (2)[ 100 200 ] }";
//! let block = split_brace_blocks(text)[0];
//! assert_eq!(find_labeled_array("recolorto", block), Some(vec![100, 200]));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod block;
mod fields;

pub use block::split_brace_blocks;
pub use fields::{find_id, find_labeled_array, find_name, ints_in_brackets};

/// One parsed definition block.
///
/// Scalar fields are `None` when absent; array fields are empty when the
/// label is missing or its bracket holds no in-range values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Definition {
    /// Numeric `id:` field, if present.
    pub id: Option<i64>,
    /// Quoted `name:` field, if present.
    pub name: Option<String>,
    /// Indices listed under `recolorFrom:`.
    pub recolor_from: Vec<u16>,
    /// Indices listed under `recolorTo:`.
    pub recolor_to: Vec<u16>,
}

/// Label of the source-color array in definition dumps.
pub const RECOLOR_FROM_LABEL: &str = "recolorFrom";

/// Label of the target-color array in definition dumps.
pub const RECOLOR_TO_LABEL: &str = "recolorTo";

/// Parses every top-level block of `text` into a [`Definition`], in order.
pub fn parse_definitions(text: &str) -> Vec<Definition> {
    split_brace_blocks(text)
        .into_iter()
        .map(|block| Definition {
            id: find_id(block),
            name: find_name(block),
            recolor_from: find_labeled_array(RECOLOR_FROM_LABEL, block).unwrap_or_default(),
            recolor_to: find_labeled_array(RECOLOR_TO_LABEL, block).unwrap_or_default(),
        })
        .collect()
}
