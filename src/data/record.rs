//! Score Record Module
//! One row of the score file and the cell values it is made of.

/// A single cell of the score file.
///
/// Cells read straight from CSV are kept as text so the displayed value is
/// exactly what the file holds; typed DataFrames produce numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

impl ScoreValue {
    /// Display text for a target.
    pub fn to_text(&self) -> String {
        match self {
            ScoreValue::Text(text) => text.clone(),
            ScoreValue::Number(value) => format_number(*value),
        }
    }

    /// Numeric reading of the cell. Unparseable text yields `NaN`.
    pub fn parse_float(&self) -> f64 {
        match self {
            ScoreValue::Number(value) => *value,
            ScoreValue::Text(text) => parse_float(text),
        }
    }
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        ScoreValue::Number(value)
    }
}

impl From<&str> for ScoreValue {
    fn from(text: &str) -> Self {
        ScoreValue::Text(text.to_string())
    }
}

/// One row of the score file. The first selected row is the latest reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub date: String,
    pub quote: String,
    pub current_score: ScoreValue,
    pub past_score: ScoreValue,
}

impl ScoreRecord {
    pub fn new(
        date: impl Into<String>,
        quote: impl Into<String>,
        current_score: impl Into<ScoreValue>,
        past_score: impl Into<ScoreValue>,
    ) -> Self {
        Self {
            date: date.into(),
            quote: quote.into(),
            current_score: current_score.into(),
            past_score: past_score.into(),
        }
    }
}

/// Shortest text for a float, with `Infinity` spelled out.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

/// Lenient float parsing: leading whitespace is skipped and the longest
/// numeric prefix is used, so `"42.5%"` reads as `42.5`. Returns `NaN` when
/// no prefix is numeric.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("42.5"), 42.5);
        assert_eq!(parse_float("-30"), -30.0);
        assert_eq!(parse_float("+7.25"), 7.25);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("3."), 3.0);
    }

    #[test]
    fn test_parse_uses_numeric_prefix() {
        assert_eq!(parse_float("  12.5 points"), 12.5);
        assert_eq!(parse_float("42.5%"), 42.5);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2e+"), 2.0);
        assert_eq!(parse_float("1.5.3"), 1.5);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_float("N/A").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("nan").is_nan());
    }

    #[test]
    fn test_number_and_text_agree() {
        for value in [42.5, -30.0, 0.0, 99.9, -100.0, 1.25e-3] {
            let number = ScoreValue::Number(value);
            let text = ScoreValue::Text(value.to_string());
            assert_eq!(number.parse_float(), value);
            assert_eq!(text.parse_float(), value);
        }
    }

    #[test]
    fn test_to_text() {
        assert_eq!(ScoreValue::Text("30.0".into()).to_text(), "30.0");
        assert_eq!(ScoreValue::Number(30.0).to_text(), "30");
        assert_eq!(ScoreValue::Number(42.5).to_text(), "42.5");
        assert_eq!(ScoreValue::Number(f64::NAN).to_text(), "NaN");
        assert_eq!(ScoreValue::Number(f64::NEG_INFINITY).to_text(), "-Infinity");
    }
}
