//! Java `SearchablePixel[]` array rendering.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PipelineError, PipelineResult};

static JAVA_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Color model tag emitted into the generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    /// `ColorModel.HSL`.
    #[default]
    Hsl,
    /// `ColorModel.RGB`.
    Rgb,
}

impl ColorModel {
    /// Java-side constant name.
    pub fn as_java(self) -> &'static str {
        match self {
            Self::Hsl => "HSL",
            Self::Rgb => "RGB",
        }
    }
}

impl FromStr for ColorModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hsl" => Ok(Self::Hsl),
            "rgb" => Ok(Self::Rgb),
            other => Err(format!("unknown color model {other:?} (expected hsl or rgb)")),
        }
    }
}

/// Parameters of the generated array literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaArraySpec {
    /// Java identifier for the array.
    pub name: String,
    /// Threshold handed to each `SingleThresholdComparator`.
    pub threshold: i64,
    /// Color model tag for each entry.
    pub color_model: ColorModel,
}

/// Renders ARGB values as a `private static final SearchablePixel[]` literal.
///
/// Decimal values are right-padded to a uniform column width. The identifier
/// is validated against `[A-Za-z_][A-Za-z0-9_]*`; an empty slice renders an
/// empty array body.
///
/// # Example
///
/// ```rust
/// use recolor_pipeline::{render_java_array, ColorModel, JavaArraySpec};
///
/// let spec = JavaArraySpec {
///     name: "GUARD_HIGHLIGHT".into(),
///     threshold: 2,
///     color_model: ColorModel::Hsl,
/// };
/// let code = render_java_array(&[-1], &spec).unwrap();
/// assert!(code.starts_with("private static final SearchablePixel[] GUARD_HIGHLIGHT"));
/// ```
pub fn render_java_array(values: &[i32], spec: &JavaArraySpec) -> PipelineResult<String> {
    if !JAVA_IDENTIFIER.is_match(&spec.name) {
        return Err(PipelineError::InvalidIdentifier(spec.name.clone()));
    }
    let decimals: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    let width = decimals.iter().map(String::len).max().unwrap_or(1);

    let mut lines = Vec::with_capacity(values.len() + 2);
    lines.push(format!(
        "private static final SearchablePixel[] {} = new SearchablePixel[]{{",
        spec.name
    ));
    for (i, dec) in decimals.iter().enumerate() {
        let pad = " ".repeat(width - dec.len());
        let comma = if i + 1 < decimals.len() { "," } else { "" };
        lines.push(format!(
            "      new SearchablePixel({dec}{pad}, new SingleThresholdComparator({}), ColorModel.{}){comma}",
            spec.threshold,
            spec.color_model.as_java(),
        ));
    }
    lines.push("};".to_string());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> JavaArraySpec {
        JavaArraySpec {
            name: name.to_string(),
            threshold: 2,
            color_model: ColorModel::Hsl,
        }
    }

    #[test]
    fn renders_padded_rows_with_trailing_commas() {
        let code = render_java_array(&[-1, -16777216], &spec("GUARD")).unwrap();
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "private static final SearchablePixel[] GUARD = new SearchablePixel[]{"
        );
        assert_eq!(
            lines[1],
            "      new SearchablePixel(-1       , new SingleThresholdComparator(2), ColorModel.HSL),"
        );
        assert_eq!(
            lines[2],
            "      new SearchablePixel(-16777216, new SingleThresholdComparator(2), ColorModel.HSL)"
        );
        assert_eq!(lines[3], "};");
    }

    #[test]
    fn rgb_model_tag() {
        let code = render_java_array(
            &[5],
            &JavaArraySpec {
                color_model: ColorModel::Rgb,
                ..spec("A")
            },
        )
        .unwrap();
        assert!(code.contains("ColorModel.RGB"));
    }

    #[test]
    fn rejects_invalid_identifier() {
        for bad in ["", "1abc", "my-array", "has space"] {
            let err = render_java_array(&[1], &spec(bad)).unwrap_err();
            assert_eq!(err, PipelineError::InvalidIdentifier(bad.to_string()));
        }
        assert!(render_java_array(&[1], &spec("_ok_2")).is_ok());
    }

    #[test]
    fn empty_values_render_empty_body() {
        let code = render_java_array(&[], &spec("EMPTY")).unwrap();
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "};");
    }

    #[test]
    fn color_model_parses_case_insensitively() {
        assert_eq!("HSL".parse::<ColorModel>(), Ok(ColorModel::Hsl));
        assert_eq!("rgb".parse::<ColorModel>(), Ok(ColorModel::Rgb));
        assert!("cmyk".parse::<ColorModel>().is_err());
    }
}
