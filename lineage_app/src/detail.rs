// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text detail card for a selected lineage.

use std::fmt::Write as _;

use lineage_hierarchy::LineageNode;

/// Badge text when a node has no period.
pub const DEFAULT_PERIOD: &str = "Lineage / School";
/// Body text when a node has no description.
pub const DEFAULT_DESCRIPTION: &str = "No specific description available for this lineage.";

/// Render the card for `node`. Nothing is selected for `None`, so the card is empty.
///
/// ```
/// use lineage_hierarchy::LineageNode;
/// use lineage_app::detail::render_card;
///
/// let card = render_card(Some(&LineageNode::new("金刚乘").with_translation("Vajrayāna")));
/// assert!(card.starts_with("[Lineage / School]\n金刚乘\nVajrayāna\n"));
/// assert!(!card.contains("Regions"));
/// assert_eq!(render_card(None), "");
/// ```
pub fn render_card(node: Option<&LineageNode>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let mut out = String::new();
    write_card(&mut out, node).expect("writing to a String cannot fail");
    out
}

fn write_card(out: &mut String, node: &LineageNode) -> std::fmt::Result {
    let period = node
        .period
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PERIOD);
    writeln!(out, "[{period}]")?;
    writeln!(out, "{}", node.name)?;
    if let Some(translation) = node.translation.as_deref().filter(|t| !t.is_empty()) {
        writeln!(out, "{translation}")?;
    }
    let rule = "─".repeat(40);
    writeln!(out, "{rule}")?;
    let description = node
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION);
    writeln!(out, "{description}")?;

    let sections = [
        ("Regions", &node.locations),
        ("Core Themes", &node.core_themes),
        ("Key Figures", &node.key_figures),
    ];
    for (heading, items) in sections {
        if items.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{}", heading.to_uppercase())?;
        writeln!(out, "  {}", items.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_card_lists_sections_in_order() {
        let node = LineageNode::new("禅宗")
            .with_translation("Chan / Zen")
            .with_period("6th Century CE")
            .with_description("Meditation school.")
            .with_location("China")
            .with_location("Japan")
            .with_core_theme("Zazen")
            .with_key_figure("慧能 (Huineng)");
        let card = render_card(Some(&node));
        let lines: Vec<_> = card.lines().collect();
        assert_eq!(lines[0], "[6th Century CE]");
        assert_eq!(lines[1], "禅宗");
        assert_eq!(lines[2], "Chan / Zen");
        assert_eq!(lines[4], "Meditation school.");

        let regions = card.find("REGIONS").unwrap();
        let themes = card.find("CORE THEMES").unwrap();
        let figures = card.find("KEY FIGURES").unwrap();
        assert!(regions < themes && themes < figures, "{card}");
        assert!(card.contains("  China, Japan\n"));
    }

    #[test]
    fn defaults_fill_missing_text() {
        let card = render_card(Some(&LineageNode::new("净土宗").with_description("")));
        assert!(card.starts_with("[Lineage / School]\n净土宗\n─"));
        assert!(card.contains(DEFAULT_DESCRIPTION));
        for heading in ["REGIONS", "CORE THEMES", "KEY FIGURES"] {
            assert!(!card.contains(heading), "{heading} shown for empty list");
        }
    }
}
