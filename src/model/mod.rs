//! Aggregation model: combine the directory hierarchy with parsed durations
//! into the flat node list a treemap renders from.

use crate::fmt::seconds_to_minutes_seconds;
use crate::tree::TreeNode;
use serde::Serialize;
use std::collections::BTreeMap;

/// One rectangle in the rendered treemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapNode {
    /// Slash-joined path segments, trimmed to start at the anchor.
    pub id: String,
    /// Id minus the last segment; empty for nodes directly at the anchor.
    pub parent: String,
    pub label: String,
    /// Own build time in seconds; 0 for pure containers.
    pub value: f64,
    /// Own + descendant build time in seconds.
    pub seconds: f64,
    /// `seconds` rendered through the duration formatter.
    pub formatted: String,
}

/// Result of one aggregation pass: the emitted nodes plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub nodes: Vec<TreemapNode>,
    pub total: f64,
}

/// Walk the hierarchy and emit treemap nodes for the subtree anchored at
/// `anchor` (ancestors above it are traversed but not emitted, so the tree
/// may be built from an absolute filesystem root).
///
/// Emission rules per (segment, subtree):
/// - `Package` leaf: one node, value = its own duration (0.0 if the package
///   never appears in the log).
/// - `PackageDir`, or a `Dir` whose name is a key in the duration map: one
///   node carrying the package's own duration, children not expanded. This
///   collapses the directory-that-is-also-a-package case without duplicate
///   ids or double counting.
/// - Pure `Dir`: children first (post-order), then a container node with
///   value 0 and the summed children total.
pub fn build_treemap_nodes(
    tree: &TreeNode,
    durations: &BTreeMap<String, f64>,
    anchor: &str,
) -> Aggregation {
    match tree.children() {
        Some(children) => walk(children, &[], durations, anchor),
        None => Aggregation {
            nodes: Vec::new(),
            total: 0.0,
        },
    }
}

fn walk(
    level: &BTreeMap<String, TreeNode>,
    path: &[String],
    durations: &BTreeMap<String, f64>,
    anchor: &str,
) -> Aggregation {
    let mut nodes = Vec::new();
    let mut total = 0.0f64;

    for (key, subtree) in level {
        let mut current_path = path.to_vec();
        current_path.push(key.clone());

        let Some(start) = current_path.iter().position(|s| s == anchor) else {
            // Still above the anchor: traverse without emitting.
            if let Some(children) = subtree.children() {
                let sub = walk(children, &current_path, durations, anchor);
                nodes.extend(sub.nodes);
                total += sub.total;
            }
            continue;
        };

        let trimmed = &current_path[start..];
        let id = trimmed.join("/");
        let parent = if trimmed.len() > 1 {
            trimmed[..trimmed.len() - 1].join("/")
        } else {
            String::new()
        };

        match subtree {
            TreeNode::Package | TreeNode::PackageDir(_) => {
                let build_time = durations.get(key).copied().unwrap_or(0.0);
                nodes.push(package_node(id, parent, key, build_time));
                total += build_time;
            }
            TreeNode::Dir(children) => {
                if let Some(&build_time) = durations.get(key) {
                    // The directory name is itself a known package.
                    nodes.push(package_node(id, parent, key, build_time));
                    total += build_time;
                } else {
                    let sub = walk(children, &current_path, durations, anchor);
                    nodes.extend(sub.nodes);
                    nodes.push(TreemapNode {
                        id,
                        parent,
                        label: key.clone(),
                        value: 0.0,
                        seconds: sub.total,
                        formatted: seconds_to_minutes_seconds(sub.total),
                    });
                    total += sub.total;
                }
            }
        }
    }

    Aggregation { nodes, total }
}

fn package_node(id: String, parent: String, label: &str, build_time: f64) -> TreemapNode {
    TreemapNode {
        id,
        parent,
        label: label.to_string(),
        value: build_time,
        seconds: build_time,
        formatted: seconds_to_minutes_seconds(build_time),
    }
}
