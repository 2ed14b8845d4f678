//! Style values and snapshots.
//!
//! A StyleSnapshot is one point in an animation's progression: an ordered map
//! of CSS-like property names to values, optionally tagged with a progress
//! offset in [0,1] and a per-keyframe easing. Descriptors are ordered
//! sequences of snapshots; the first snapshot is the hidden/initial state and
//! the last is the revealed/final state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One CSS-like property value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StyleValue {
    /// Unitless number (opacity, scale factors).
    Number(f32),
    /// Free-form CSS text (transform lists, filter functions, keywords).
    Text(String),
}

impl StyleValue {
    #[inline]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Number(_) => None,
            StyleValue::Text(s) => Some(s),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

/// A named point in an animation's progression.
///
/// Property order is preserved so hosts can serialize snapshots back to
/// deterministic style text.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StyleSnapshot {
    /// Normalized progress offset in [0,1]; None lets the platform distribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f32>,
    /// Per-keyframe easing applied from this snapshot to the next.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    /// CSS-like property name to value, in declaration order.
    pub properties: IndexMap<String, StyleValue>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot at a given normalized offset.
    pub fn at(offset: f32) -> Self {
        Self {
            offset: Some(offset),
            ..Self::default()
        }
    }

    /// Builder-style property assignment.
    pub fn prop(mut self, name: &str, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Builder-style easing assignment.
    pub fn ease(mut self, easing: &str) -> Self {
        self.easing = Some(easing.to_string());
        self
    }

    /// The snapshot every fallback path resolves to: fully visible, untransformed.
    pub fn revealed() -> Self {
        Self::new().prop("opacity", 1.0)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    /// Numeric opacity if present.
    #[inline]
    pub fn opacity(&self) -> Option<f32> {
        self.get("opacity").and_then(StyleValue::as_number)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_property_order() {
        let snap = StyleSnapshot::at(0.0)
            .prop("opacity", 0.0)
            .prop("transform", "translate3d(0, -100%, 0)");
        let names: Vec<&str> = snap.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["opacity", "transform"]);
        assert_eq!(snap.offset, Some(0.0));
        assert_eq!(snap.opacity(), Some(0.0));
    }

    #[test]
    fn revealed_is_opaque() {
        assert_eq!(StyleSnapshot::revealed().opacity(), Some(1.0));
    }
}
