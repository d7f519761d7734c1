use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::position::{Offset, format_percent, parse_percent};

pub const LEFT: &str = "left";
pub const TOP: &str = "top";

/// Presentation attributes of an element (`style:` in the card)
///
/// Backed by an ordered mapping so keys are written back in the order the
/// user typed them, and values the user wrote as plain numbers stay numbers
/// until the editor overwrites them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Mapping);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of an attribute as text. Non-scalar values read as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0
            .insert(Value::String(key.to_string()), Value::String(value.into()));
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String-keyed scalar attributes in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.0
            .iter()
            .filter_map(|(key, value)| Some((key.as_str()?, scalar_text(value)?)))
    }

    /// Current left/top offset; unparseable or missing values count as 0
    pub fn offset(&self) -> Offset {
        Offset {
            left: self.get(LEFT).map(|v| parse_percent(&v)).unwrap_or(0.0),
            top: self.get(TOP).map(|v| parse_percent(&v)).unwrap_or(0.0),
        }
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.set(LEFT, format_percent(offset.left));
        self.set(TOP, format_percent(offset.top));
    }
}

impl From<Mapping> for Style {
    fn from(attributes: Mapping) -> Self {
        Self(attributes)
    }
}

impl From<Style> for Mapping {
    fn from(style: Style) -> Self {
        style.0
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
