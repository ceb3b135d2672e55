//! Pure traversal algorithms over a borrowed binary tree.
//!
//! Every function takes the tree root as `Option<&TreeNode<T>>`, where
//! `None` stands for the empty tree, and returns its defined empty-tree
//! result without failure. Nothing here mutates the tree; working state
//! (accumulators, sets, path buffers, queues) lives and dies inside one
//! top-level call.
//!
//! Recursion depth equals tree height. Callers own the precondition that
//! trees are finite and shallow enough for the call stack; there is no
//! depth guard and no cycle detection (cycles are unconstructible with
//! exclusively owned children anyway).

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::instrument;

use crate::tree::TreeNode;

/// Sums the values of all leaf nodes. Internal node values are excluded.
///
/// The empty tree sums to 0; a single-node tree is its own leaf and
/// returns its value.
#[instrument(level = "trace", skip_all)]
pub fn sum_leaf_nodes(root: Option<&TreeNode<i64>>) -> i64 {
    match root {
        None => 0,
        Some(node) if node.is_leaf() => node.value,
        Some(node) => sum_leaf_nodes(node.left.as_deref()) + sum_leaf_nodes(node.right.as_deref()),
    }
}

/// Counts the nodes having at least one child.
///
/// A node with exactly one present child is internal and counts as 1;
/// its existing subtree is still searched for further internal nodes.
#[instrument(level = "trace", skip_all)]
pub fn count_internal_nodes<T>(root: Option<&TreeNode<T>>) -> usize {
    match root {
        None => 0,
        Some(node) if node.is_leaf() => 0,
        Some(node) => {
            1 + count_internal_nodes(node.left.as_deref())
                + count_internal_nodes(node.right.as_deref())
        }
    }
}

/// Concatenates the `Display` text of every value in post-order
/// (left subtree, right subtree, node). The empty tree yields `""`.
#[instrument(level = "debug", skip_all)]
pub fn build_post_order_string<T: fmt::Display>(root: Option<&TreeNode<T>>) -> String {
    let mut out = String::new();
    if let Some(node) = root {
        append_post_order(node, &mut out);
    }
    out
}

fn append_post_order<T: fmt::Display>(node: &TreeNode<T>, out: &mut String) {
    if let Some(left) = node.left.as_deref() {
        append_post_order(left, out);
    }
    if let Some(right) = node.right.as_deref() {
        append_post_order(right, out);
    }
    out.push_str(&node.value.to_string());
}

/// Collects all values in breadth-first order: top level to bottom level,
/// left to right within a level.
///
/// Uses an explicit FIFO worklist seeded with the root. Merging the two
/// independently traversed child lists does not reproduce level order once
/// the tree has more than two levels, because each child list already
/// interleaves several levels; the queue is the general form.
#[instrument(level = "debug", skip_all)]
pub fn collect_level_order_values<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    let mut queue = VecDeque::new();
    if let Some(node) = root {
        queue.push_back(node);
    }

    while let Some(node) = queue.pop_front() {
        values.push(&node.value);
        if let Some(left) = node.left.as_deref() {
            queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back(right);
        }
    }

    values
}

/// Counts the distinct values in the tree, by value equality.
///
/// All values are gathered into a hash set and its size reported, so
/// duplicates anywhere in the structure collapse to one.
#[instrument(level = "debug", skip_all)]
pub fn count_distinct_values<T: Eq + Hash>(root: Option<&TreeNode<T>>) -> usize {
    let mut values = HashSet::new();
    if let Some(node) = root {
        collect_values(node, &mut values);
    }
    values.len()
}

fn collect_values<'a, T: Eq + Hash>(node: &'a TreeNode<T>, values: &mut HashSet<&'a T>) {
    values.insert(&node.value);
    if let Some(left) = node.left.as_deref() {
        collect_values(left, values);
    }
    if let Some(right) = node.right.as_deref() {
        collect_values(right, values);
    }
}

/// True iff some root-to-leaf path is strictly increasing at every
/// parent-to-child step.
///
/// The comparison is checked on every edge of the path; it is not enough
/// that a subtree contains an increasing path of its own. The empty tree
/// has no path and yields false. A single node is a path of length one
/// with no edge to violate, so it yields true.
#[instrument(level = "trace", skip_all)]
pub fn has_strictly_increasing_path<T: PartialOrd>(root: Option<&TreeNode<T>>) -> bool {
    match root {
        None => false,
        Some(node) if node.is_leaf() => true,
        Some(node) => {
            increasing_into(node, node.left.as_deref()) || increasing_into(node, node.right.as_deref())
        }
    }
}

/// The edge parent -> child ascends and child's subtree continues the path.
fn increasing_into<T: PartialOrd>(parent: &TreeNode<T>, child: Option<&TreeNode<T>>) -> bool {
    match child {
        Some(child) => parent.value < child.value && has_strictly_increasing_path(Some(child)),
        None => false,
    }
}

/// True iff both trees have the same arrangement of present and absent
/// children, irrespective of stored values. The value types of the two
/// trees need not match.
#[instrument(level = "trace", skip_all)]
pub fn have_same_shape<T, U>(a: Option<&TreeNode<T>>, b: Option<&TreeNode<U>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            have_same_shape(a.left.as_deref(), b.left.as_deref())
                && have_same_shape(a.right.as_deref(), b.right.as_deref())
        }
        _ => false,
    }
}

/// Enumerates every root-to-leaf path as a root-first sequence of value
/// references, paths ordered left subtree before right subtree at every
/// branching point.
///
/// A single mutable buffer backs the walk: the value is pushed on entry,
/// snapshotted when a leaf is reached, and popped on exit, so the buffer
/// always mirrors the path from the root to the node being visited.
#[instrument(level = "debug", skip_all)]
pub fn find_all_root_to_leaf_paths<T>(root: Option<&TreeNode<T>>) -> Vec<Vec<&T>> {
    let mut paths = Vec::new();
    let mut buffer = Vec::new();
    if let Some(node) = root {
        collect_paths(node, &mut buffer, &mut paths);
    }
    paths
}

// Push and pop are paired at entry and exit of this scope, with no early
// return in between, so the buffer is restored on every unwind of the
// recursion.
fn collect_paths<'a, T>(
    node: &'a TreeNode<T>,
    buffer: &mut Vec<&'a T>,
    paths: &mut Vec<Vec<&'a T>>,
) {
    buffer.push(&node.value);

    if node.is_leaf() {
        paths.push(buffer.clone());
    } else {
        if let Some(left) = node.left.as_deref() {
            collect_paths(left, buffer, paths);
        }
        if let Some(right) = node.right.as_deref() {
            collect_paths(right, buffer, paths);
        }
    }

    buffer.pop();
}

/// Height of the tree in nodes; the empty tree has depth 0.
#[instrument(level = "trace", skip_all)]
pub fn depth<T>(root: Option<&TreeNode<T>>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + depth(node.left.as_deref()).max(depth(node.right.as_deref())),
    }
}

/// Total number of nodes in the tree.
pub fn count_nodes<T>(root: Option<&TreeNode<T>>) -> usize {
    root.map_or(0, |node| node.iter().count())
}

/// Number of leaf nodes in the tree.
pub fn count_leaf_nodes<T>(root: Option<&TreeNode<T>>) -> usize {
    root.map_or(0, |node| node.iter().filter(|n| n.is_leaf()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node_is_its_own_leaf() {
        let tree = TreeNode::new(7);
        assert_eq!(sum_leaf_nodes(Some(&tree)), 7);
        assert_eq!(count_internal_nodes(Some(&tree)), 0);
    }

    #[test]
    fn test_one_child_node_counts_as_internal() {
        //  1
        //   \
        //    2
        let tree = TreeNode::with_children(1, None, Some(TreeNode::new(2)));
        assert_eq!(count_internal_nodes(Some(&tree)), 1);
        assert_eq!(sum_leaf_nodes(Some(&tree)), 2);
    }

    #[test]
    fn test_post_order_appends_node_after_both_subtrees() {
        let tree = TreeNode::with_children("c", Some(TreeNode::new("a")), Some(TreeNode::new("b")));
        assert_eq!(build_post_order_string(Some(&tree)), "abc");
    }

    #[test]
    fn test_increasing_path_needs_every_edge_to_ascend() {
        // 10 -> 2 -> 5: the 2 -> 5 edge ascends but 10 -> 2 does not,
        // so the subtree-local path must not satisfy the whole tree.
        let tree = TreeNode::with_children(
            10,
            Some(TreeNode::with_children(2, Some(TreeNode::new(5)), None)),
            None,
        );
        assert!(!has_strictly_increasing_path(Some(&tree)));
        assert!(has_strictly_increasing_path(tree.left.as_deref()));
    }

    #[test]
    fn test_path_buffer_is_restored_between_branches() {
        //      1
        //     / \
        //    2   3
        let tree = TreeNode::with_children(1, Some(TreeNode::new(2)), Some(TreeNode::new(3)));
        let paths = find_all_root_to_leaf_paths(Some(&tree));
        assert_eq!(paths, vec![vec![&1, &2], vec![&1, &3]]);
    }
}
