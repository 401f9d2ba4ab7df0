//! Brace-balanced block splitting.

/// Splits `text` into its maximal top-level brace-balanced spans.
///
/// A single left-to-right scan tracks `{`/`}` nesting depth. Each span that
/// returns the depth to zero is emitted in order of appearance, braces
/// included; nested braces stay verbatim inside their enclosing span. Stray
/// `}` at depth zero is skipped, and a trailing `{` with no closing brace
/// contributes nothing.
///
/// # Example
///
/// ```rust
/// use recolor_extract::split_brace_blocks;
///
/// let blocks = split_brace_blocks("before {outer {inner} still outer} after {two}");
/// assert_eq!(blocks, vec!["{outer {inner} still outer}", "{two}"]);
/// ```
pub fn split_brace_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, ch) in text.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(s) = start.take() {
                            blocks.push(&text[s..i + 1]);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks_stay_whole() {
        let blocks = split_brace_blocks("before {outer {inner} still outer} after {two}");
        assert_eq!(blocks, vec!["{outer {inner} still outer}", "{two}"]);
    }

    #[test]
    fn no_braces_no_blocks() {
        assert!(split_brace_blocks("just text, 1 2 3").is_empty());
        assert!(split_brace_blocks("").is_empty());
    }

    #[test]
    fn stray_close_brace_is_skipped() {
        assert_eq!(split_brace_blocks("} {a}"), vec!["{a}"]);
    }

    #[test]
    fn unbalanced_open_brace_yields_nothing() {
        assert_eq!(split_brace_blocks("{a} {unclosed"), vec!["{a}"]);
        assert!(split_brace_blocks("{never closed {still open}").is_empty());
    }

    #[test]
    fn handles_multibyte_text() {
        let blocks = split_brace_blocks("héllo {wörld {ünner} ok} ☃");
        assert_eq!(blocks, vec!["{wörld {ünner} ok}"]);
    }
}
