// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lineage dataset: bundled or loaded from a file.

use std::path::Path;

use lineage_hierarchy::{Hierarchy, LineageNode};

use crate::error::{AppError, Result};

const BUNDLED: &str = include_str!("../data/lineages.json");

/// Parse the dataset compiled into the binary.
pub fn bundled() -> Result<LineageNode> {
    Ok(serde_json::from_str(BUNDLED)?)
}

/// Read a dataset file, or the bundled one when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<LineageNode> {
    let Some(path) = path else {
        return bundled();
    };
    if !path.exists() {
        return Err(AppError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    let root: LineageNode = serde_json::from_str(&text)?;
    tracing::info!(path = %path.display(), "loaded dataset");
    Ok(root)
}

/// The first node, in pre-order, whose name or translation matches `query`.
///
/// Names match exactly; translations match ignoring ASCII case.
pub fn find<'a>(root: &'a LineageNode, query: &str) -> Result<&'a LineageNode> {
    let query = query.trim();
    let tree = Hierarchy::new(root);
    let index = tree
        .find(|n| n.name == query)
        .or_else(|| {
            tree.find(|n| {
                n.translation
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(query))
            })
        })
        .ok_or_else(|| AppError::not_found(query))?;
    Ok(tree.get(index).data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn bundled_dataset_has_every_lineage() {
        let root = bundled().unwrap();
        assert_eq!(root.name, "原始佛教");
        assert_eq!(Hierarchy::new(&root).len(), 23);
    }

    #[test]
    fn find_by_name_or_translation() {
        let root = bundled().unwrap();
        let by_name = find(&root, "禅宗").unwrap();
        assert_eq!(by_name.name, "禅宗");
        let by_translation = find(&root, by_name.translation.as_deref().unwrap()).unwrap();
        assert!(std::ptr::eq(by_name, by_translation));
        assert!(matches!(
            find(&root, "not a school"),
            Err(AppError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn load_reads_a_replacement_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"root","children":[{{"name":"leaf"}}]}}"#).unwrap();
        let root = load(Some(file.path())).unwrap();
        assert_eq!(root.children[0].name, "leaf");

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "[1, 2").unwrap();
        assert!(matches!(load(Some(bad.path())), Err(AppError::Json(_))));

        assert_eq!(load(None).unwrap(), bundled().unwrap());
    }
}
