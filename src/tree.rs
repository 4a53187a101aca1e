//! Directory hierarchy built from the resolved package paths.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::mem;
use std::path::MAIN_SEPARATOR;

/// Sentinel segment every real path nests under, so the tree has one root.
pub const ROOT_LABEL: &str = ".";

/// One node in the directory hierarchy.
///
/// The directory-that-is-also-a-package case is its own variant instead of a
/// name collision inside a children map.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Plain directory.
    Dir(BTreeMap<String, TreeNode>),
    /// Terminal leaf marking a registered package name.
    Package,
    /// Directory that is itself a registered package; children preserved.
    PackageDir(BTreeMap<String, TreeNode>),
}

impl TreeNode {
    pub fn children(&self) -> Option<&BTreeMap<String, TreeNode>> {
        match self {
            TreeNode::Dir(children) | TreeNode::PackageDir(children) => Some(children),
            TreeNode::Package => None,
        }
    }
}

/// Build the hierarchy tree from package name -> path mappings.
///
/// Each path is split on the host separator and inserted depth-first; shared
/// ancestors merge because insertion reuses existing children maps. After the
/// structural insertion the package identifier itself is inserted as a
/// terminal leaf at the final insertion point, upgrading an existing
/// directory of the same name to `PackageDir`.
pub fn build_hierarchy(package_dirs: &BTreeMap<String, String>) -> TreeNode {
    let mut top: BTreeMap<String, TreeNode> = BTreeMap::new();

    for (package, path) in package_dirs {
        let mut level = &mut top;
        for segment in path.split(MAIN_SEPARATOR).filter(|s| !s.is_empty()) {
            let node = level
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::Dir(BTreeMap::new()));
            // A package leaf hit mid-path becomes a package directory so the
            // deeper path can keep nesting under it.
            if matches!(node, TreeNode::Package) {
                *node = TreeNode::PackageDir(BTreeMap::new());
            }
            level = match node {
                TreeNode::Dir(children) | TreeNode::PackageDir(children) => children,
                TreeNode::Package => unreachable!(),
            };
        }

        match level.entry(package.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(TreeNode::Package);
            }
            Entry::Occupied(mut entry) => {
                if let TreeNode::Dir(children) = entry.get_mut() {
                    let children = mem::take(children);
                    entry.insert(TreeNode::PackageDir(children));
                }
                // Already Package or PackageDir: duplicate insert, no change.
            }
        }
    }

    let mut root = BTreeMap::new();
    root.insert(ROOT_LABEL.to_string(), TreeNode::Dir(top));
    TreeNode::Dir(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dirs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect()
    }

    fn descend<'a>(node: &'a TreeNode, path: &[&str]) -> &'a TreeNode {
        let mut current = node;
        for segment in path {
            current = current
                .children()
                .and_then(|c| c.get(*segment))
                .unwrap_or_else(|| panic!("missing segment {segment}"));
        }
        current
    }

    #[test]
    fn single_package_nests_under_sentinel_root() {
        let tree = build_hierarchy(&dirs(&[("pkg_a", "ws/src/group1/pkg_a")]));

        let leaf = descend(&tree, &[".", "ws", "src", "group1", "pkg_a", "pkg_a"]);
        assert_eq!(*leaf, TreeNode::Package);
    }

    #[test]
    fn shared_prefixes_merge() {
        let tree = build_hierarchy(&dirs(&[
            ("pkg_a", "ws/src/group1/pkg_a"),
            ("pkg_b", "ws/src/group1/pkg_b"),
            ("pkg_c", "ws/src/group2/pkg_c"),
        ]));

        let src = descend(&tree, &[".", "ws", "src"]);
        let groups = src.children().unwrap();
        assert_eq!(
            groups.keys().collect::<Vec<_>>(),
            vec!["group1", "group2"]
        );
        let group1 = groups["group1"].children().unwrap();
        assert_eq!(group1.keys().collect::<Vec<_>>(), vec!["pkg_a", "pkg_b"]);
    }

    #[test]
    fn package_leaf_colliding_with_directory_becomes_package_dir() {
        // "group1" is both an ancestor directory of pkg_a and a package
        // resolved at ws/src. The directory is upgraded, not clobbered.
        let tree = build_hierarchy(&dirs(&[
            ("pkg_a", "ws/src/group1/pkg_a"),
            ("group1", "ws/src"),
        ]));

        let group1 = descend(&tree, &[".", "ws", "src", "group1"]);
        match group1 {
            TreeNode::PackageDir(children) => {
                assert!(children.contains_key("pkg_a"));
            }
            other => panic!("expected PackageDir, got {other:?}"),
        }
    }

    #[test]
    fn package_leaf_hit_mid_path_is_upgraded() {
        let tree = build_hierarchy(&dirs(&[
            ("outer", "ws/src"),
            ("inner", "ws/src/outer/inner"),
        ]));

        let outer = descend(&tree, &[".", "ws", "src", "outer"]);
        assert!(matches!(outer, TreeNode::PackageDir(_)));
        let leaf = descend(&tree, &[".", "ws", "src", "outer", "inner", "inner"]);
        assert_eq!(*leaf, TreeNode::Package);
    }

    #[test]
    fn absolute_paths_drop_the_empty_leading_segment() {
        let tree = build_hierarchy(&dirs(&[("pkg_a", "/ws/src/pkg_a")]));
        let root = descend(&tree, &["."]);
        assert_eq!(root.children().unwrap().keys().collect::<Vec<_>>(), vec!["ws"]);
    }
}
