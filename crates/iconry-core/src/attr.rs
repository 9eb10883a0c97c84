//! Attribute values carried by property bags and live nodes.

use std::fmt;

use serde::Deserialize;

/// A single attribute value.
///
/// Values are stored exactly as supplied and only turned into text when a
/// node is serialized. Numbers use Rust's shortest `f64` formatting, so
/// `24.0` is written as `24`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl AttrValue {
    /// Returns the text content if this is a [`AttrValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric value if this is a [`AttrValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&AttrValue> for svg::node::Value {
    fn from(value: &AttrValue) -> Self {
        svg::node::Value::from(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_display_number_drops_trailing_zero() {
        assert_eq!(AttrValue::from(24).to_string(), "24");
        assert_eq!(AttrValue::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_display_text_and_flag() {
        assert_eq!(AttrValue::from("Google Drive").to_string(), "Google Drive");
        assert_eq!(AttrValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_accessors() {
        let number = AttrValue::from(12u32);
        assert_approx_eq!(f64, number.as_number().unwrap(), 12.0);
        assert_eq!(number.as_text(), None);

        let text = AttrValue::from(String::from("icon"));
        assert_eq!(text.as_text(), Some("icon"));
        assert_eq!(text.as_number(), None);
    }
}
