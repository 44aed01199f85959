// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prompt text for the assistant.

use lineage_hierarchy::LineageNode;

const NOT_AVAILABLE: &str = "N/A";

fn list_or_na(items: &[String]) -> String {
    if items.is_empty() {
        NOT_AVAILABLE.to_owned()
    } else {
        items.join(", ")
    }
}

/// The scholarly context block describing `node`.
///
/// Absent or empty fields read `N/A`.
pub fn context_for(node: &LineageNode) -> String {
    let translation = node.translation.as_deref().unwrap_or_default();
    let description = node
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NOT_AVAILABLE);
    format!(
        "You are an expert scholar of Buddhism (Buddhologist) with deep knowledge of history, philosophy, and practice.\n\
         The user is currently viewing the node: \"{name}\" ({translation}) in a visualization tree.\n\
         \n\
         Context Information about this node:\n\
         - Description: {description}\n\
         - Key Figures: {figures}\n\
         - Core Themes: {themes}\n\
         - Locations: {locations}\n",
        name = node.name,
        figures = list_or_na(&node.key_figures),
        themes = list_or_na(&node.core_themes),
        locations = list_or_na(&node.locations),
    )
}

/// The instruction sent after the context.
///
/// A blank or missing question asks for a short summary instead.
pub fn prompt_for(node: &LineageNode, question: Option<&str>) -> String {
    match question.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!(
            "The user asks: \"{q}\". Answer accurately and helpfully based on the context of {}.",
            node.name
        ),
        None => format!(
            "Provide a concise, engaging summary (max 3 sentences) of {} aimed at a student learning Buddhist history. Mention its significance.",
            node.name
        ),
    }
}

/// The opening message of a chat about `node`.
pub fn greeting(node: &LineageNode) -> String {
    format!(
        "Greetings. I am here to assist your understanding of {} ({}). What would you like to know?",
        node.name,
        node.translation.as_deref().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zen() -> LineageNode {
        LineageNode::new("禅宗")
            .with_translation("Chan / Zen")
            .with_description("Emphasizes meditation and direct insight.")
            .with_key_figure("菩提达摩 (Bodhidharma)")
            .with_key_figure("慧能 (Huineng)")
            .with_core_theme("Zazen")
            .with_location("China")
            .with_location("Japan")
    }

    #[test]
    fn context_lists_every_field() {
        let ctx = context_for(&zen());
        assert!(ctx.contains(r#"viewing the node: "禅宗" (Chan / Zen) in a visualization tree."#));
        assert!(ctx.contains("- Description: Emphasizes meditation and direct insight.\n"));
        assert!(ctx.contains("- Key Figures: 菩提达摩 (Bodhidharma), 慧能 (Huineng)\n"));
        assert!(ctx.contains("- Core Themes: Zazen\n"));
        assert!(ctx.contains("- Locations: China, Japan\n"));
        assert!(!ctx.contains("N/A"));
    }

    #[test]
    fn absent_fields_read_na() {
        let ctx = context_for(&LineageNode::new("金刚乘"));
        assert!(ctx.contains(r#""金刚乘" () in"#));
        assert_eq!(ctx.matches("N/A").count(), 4);
    }

    #[test]
    fn question_is_quoted_and_blank_means_summary() {
        let node = zen();
        assert_eq!(
            prompt_for(&node, Some("  Who founded it? ")),
            "The user asks: \"Who founded it?\". Answer accurately and helpfully based on the context of 禅宗."
        );
        for blank in [None, Some(""), Some("   ")] {
            let p = prompt_for(&node, blank);
            assert!(p.starts_with("Provide a concise, engaging summary (max 3 sentences) of 禅宗"), "{p}");
        }
    }

    #[test]
    fn greeting_names_the_node() {
        assert_eq!(
            greeting(&zen()),
            "Greetings. I am here to assist your understanding of 禅宗 (Chan / Zen). What would you like to know?"
        );
    }
}
