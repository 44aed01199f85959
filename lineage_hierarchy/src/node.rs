// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lineage record and the nesting abstraction used by the builder.

use alloc::string::String;
use alloc::vec::Vec;

/// Fill color used when a node carries no color of its own.
pub const DEFAULT_COLOR: &str = "#9ca3af";

/// A recursive record with ordered children.
///
/// [`Hierarchy`](crate::Hierarchy) and the layout engine only need this much from
/// their input, so any owned tree can be laid out.
pub trait Nested: Sized {
    /// Children in display order. An empty slice marks a leaf.
    fn children(&self) -> &[Self];
}

/// One school, tradition, or sub-tradition in the lineage dataset.
///
/// Sequences default to empty and optional text to `None`; with the `serde` feature
/// the JSON form uses camelCase keys (`keyFigures`, `coreThemes`) and omits absent fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineageNode {
    /// Display label.
    pub name: String,
    /// Secondary label, usually an English rendering of the name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub translation: Option<String>,
    /// Historical period, e.g. `5th Century BCE`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub period: Option<String>,
    /// Free-form description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Notable teachers and founders.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub key_figures: Vec<String>,
    /// Central doctrines and practices.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub core_themes: Vec<String>,
    /// Regions where the lineage is practiced.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub locations: Vec<String>,
    /// Hex-style color used to group related lineages visually.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color: Option<String>,
    /// Descendant lineages in display order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Self>,
}

impl LineageNode {
    /// Create a leaf with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the translation label.
    #[must_use]
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Set the period.
    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the grouping color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Append a key figure.
    #[must_use]
    pub fn with_key_figure(mut self, figure: impl Into<String>) -> Self {
        self.key_figures.push(figure.into());
        self
    }

    /// Append a core theme.
    #[must_use]
    pub fn with_core_theme(mut self, theme: impl Into<String>) -> Self {
        self.core_themes.push(theme.into());
        self
    }

    /// Append a location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    /// Append a child lineage.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child lineages in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The node color, or [`DEFAULT_COLOR`] when none is set.
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }
}

impl Nested for LineageNode {
    fn children(&self) -> &[Self] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_falls_back_to_neutral_gray() {
        let plain = LineageNode::new("plain");
        assert_eq!(plain.color_or_default(), "#9ca3af");

        let tinted = LineageNode::new("tinted").with_color("#be123c");
        assert_eq!(tinted.color_or_default(), "#be123c");
    }

    #[test]
    fn builders_preserve_child_order() {
        let node = LineageNode::new("root")
            .with_child(LineageNode::new("a"))
            .with_children([LineageNode::new("b"), LineageNode::new("c")]);
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(!node.is_leaf());
        assert!(node.children[0].is_leaf());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_and_absent_fields() {
        let json = r##"{
            "name": "大乘佛教",
            "translation": "Mahāyāna",
            "keyFigures": ["龙树菩萨 (Nagarjuna)"],
            "color": "#be123c",
            "children": [{ "name": "禅宗" }]
        }"##;
        let node: LineageNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.name, "大乘佛教");
        assert_eq!(node.key_figures.len(), 1);
        assert!(node.core_themes.is_empty());
        assert!(node.description.is_none());
        assert_eq!(node.children[0].name, "禅宗");
        assert!(node.children[0].is_leaf());

        let back = serde_json::to_value(&node.children[0]).unwrap();
        assert_eq!(back, serde_json::json!({ "name": "禅宗" }));
    }
}
