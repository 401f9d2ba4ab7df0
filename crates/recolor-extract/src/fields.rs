//! Labeled arrays and scalar fields inside a block.

use std::sync::LazyLock;

use regex::Regex;

/// Parenthesized count annotation directly before an opening bracket,
/// e.g. `(5)[`.
static COUNT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\d+\s*\)\s*\[").unwrap());

/// Signed integer token.
static INT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").unwrap());

static ID_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bid\s*:\s*(-?\d+)").unwrap());

static NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bname\s*:\s*"([^"]*)""#).unwrap());

/// Extracts every in-range integer token from bracketed content.
///
/// Count annotations (`(5)[`) are stripped down to `[` first, then every
/// `-?\d+` token is parsed. Only values in [0, 65535] survive; negatives are
/// matched by the pattern but dropped by the range filter, and tokens too
/// long to parse are skipped. Order of appearance is preserved and nothing
/// here is ever an error.
///
/// # Example
///
/// ```rust
/// use recolor_extract::ints_in_brackets;
///
/// assert_eq!(ints_in_brackets("[\n 1\n -2\n 70000\n 42\n]"), vec![1, 42]);
/// ```
pub fn ints_in_brackets(text: &str) -> Vec<u16> {
    let cleaned = COUNT_PREFIX.replace_all(text, "[");
    INT_TOKEN
        .find_iter(&cleaned)
        .filter_map(|m| m.as_str().parse::<i64>().ok())
        .filter(|v| (0..=65535).contains(v))
        .map(|v| v as u16)
        .collect()
}

/// Finds the bracketed array following `<label> :` and extracts its integers.
///
/// Matching is case-insensitive and whitespace-flexible, with the bracket
/// interior captured non-greedily across lines. The counted form
/// `label: (n)[ ... ]` is tried first, then the plain `label: [ ... ]` form.
/// `None` means the label was not found at all, which is distinct from a
/// matched-but-empty array.
///
/// # Example
///
/// ```rust
/// use recolor_extract::find_labeled_array;
///
/// let text = "recolorTo: (3)[\n 100\n 200\n 300\n ]";
/// assert_eq!(find_labeled_array("recolorTo", text), Some(vec![100, 200, 300]));
/// assert_eq!(find_labeled_array("recolorFrom", text), None);
/// ```
pub fn find_labeled_array(label: &str, text: &str) -> Option<Vec<u16>> {
    let label = regex::escape(label);
    let counted = Regex::new(&format!(r"(?is){label}\s*:\s*\(\s*\d+\s*\)\s*\[(.*?)\]"))
        .expect("escaped label forms a valid pattern");
    if let Some(caps) = counted.captures(text) {
        return Some(ints_in_brackets(&caps[1]));
    }
    let plain = Regex::new(&format!(r"(?is){label}\s*:\s*\[(.*?)\]"))
        .expect("escaped label forms a valid pattern");
    plain.captures(text).map(|caps| ints_in_brackets(&caps[1]))
}

/// Finds the numeric `id:` field, case-insensitively.
pub fn find_id(text: &str) -> Option<i64> {
    ID_FIELD
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Finds the quoted `name:` field, case-insensitively.
pub fn find_name(text: &str) -> Option<String> {
    NAME_FIELD.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_filter_drops_negatives_and_overflow() {
        assert_eq!(ints_in_brackets("[\n 1\n -2\n 70000\n 42\n]"), vec![1, 42]);
        // Boundary values survive.
        assert_eq!(ints_in_brackets("[0 65535 65536 -1]"), vec![0, 65535]);
    }

    #[test]
    fn count_prefix_digits_are_not_values() {
        // Without stripping, the 5 of "(5)[" would leak into the result.
        assert_eq!(ints_in_brackets("(5)[ 10 20 ]"), vec![10, 20]);
        assert_eq!(ints_in_brackets("( 3 ) [ 7 ]"), vec![7]);
    }

    #[test]
    fn absurdly_long_tokens_are_skipped() {
        let text = format!("[ 11 {} 22 ]", "9".repeat(40));
        assert_eq!(ints_in_brackets(&text), vec![11, 22]);
    }

    #[test]
    fn labeled_array_counted_form() {
        let text = "recolorTo: (3)[\n 100\n 200\n 300\n ]";
        assert_eq!(find_labeled_array("recolorTo", text), Some(vec![100, 200, 300]));
        // Case-insensitive lookup.
        assert_eq!(find_labeled_array("RECOLORTO", text), Some(vec![100, 200, 300]));
    }

    #[test]
    fn labeled_array_plain_form_fallback() {
        let text = "recolorTo: [ 5 6 ]";
        assert_eq!(find_labeled_array("recolorTo", text), Some(vec![5, 6]));
    }

    #[test]
    fn labeled_array_not_found_vs_empty() {
        assert_eq!(find_labeled_array("recolorTo", "nothing here"), None);
        assert_eq!(find_labeled_array("recolorTo", "recolorTo: [ ]"), Some(vec![]));
    }

    #[test]
    fn scalar_fields() {
        let text = "id: 1234\nname: \"Tester\"\n";
        assert_eq!(find_id(text), Some(1234));
        assert_eq!(find_name(text), Some("Tester".to_string()));
        assert_eq!(find_id("no fields"), None);
        assert_eq!(find_name("name: unquoted"), None);
    }

    #[test]
    fn scalar_fields_are_case_insensitive() {
        assert_eq!(find_id("ID: -7"), Some(-7));
        assert_eq!(find_name("NAME: \"x\""), Some("x".to_string()));
    }
}
