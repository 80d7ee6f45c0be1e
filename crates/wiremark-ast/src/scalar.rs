//! Scalar attribute values
//!
//! Attribute values in source (`w=240`, `label="Save"`, `disabled=true`) are
//! one of three shapes. The lexer parses them once; everything downstream
//! pattern-matches instead of re-parsing strings.

use std::fmt;

/// A single attribute value: string, number, or boolean.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Unquoted word or quoted string (quotes and escapes already resolved)
    Str(String),

    /// Numeric literal, stored as f64 (the language has no integer type)
    Number(f64),

    /// `true` or `false`
    Bool(bool),
}

impl Scalar {
    /// Classify a raw value: `true`/`false` become booleans, parseable
    /// numbers become numbers, everything else stays a string.
    pub fn classify(raw: &str) -> Scalar {
        match raw {
            "true" => Scalar::Bool(true),
            "false" => Scalar::Bool(false),
            _ => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => Scalar::Number(n),
                _ => Scalar::Str(raw.to_string()),
            },
        }
    }

    /// String view, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean view, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_booleans() {
        assert_eq!(Scalar::classify("true"), Scalar::Bool(true));
        assert_eq!(Scalar::classify("false"), Scalar::Bool(false));
    }

    #[test]
    fn classify_numbers() {
        assert_eq!(Scalar::classify("240"), Scalar::Number(240.0));
        assert_eq!(Scalar::classify("-3.5"), Scalar::Number(-3.5));
    }

    #[test]
    fn percent_stays_a_string() {
        // Percent sizes are resolved by the layout engine, not here
        assert_eq!(Scalar::classify("50%"), Scalar::Str("50%".to_string()));
    }

    #[test]
    fn words_stay_strings() {
        assert_eq!(
            Scalar::classify("between"),
            Scalar::Str("between".to_string())
        );
    }
}
