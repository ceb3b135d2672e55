//! Recursive traversal algorithms over an immutable, generically-typed
//! binary tree.
//!
//! The crate computes aggregate properties (sums, counts, distinct-value
//! counts), derives serialized representations (post-order concatenation),
//! enumerates structural paths (root-to-leaf paths, level-order values),
//! and compares tree shapes. It is an algorithmic utility library: no I/O,
//! no persistence, no concurrency.
//!
//! The tree itself is the minimal [`TreeNode`] container; every algorithm
//! consumes it through read access only and treats an absent root
//! (`None`) as the empty tree.
//!
//! ```
//! use rstree::{traversal, TreeNode};
//!
//! //      1
//! //     / \
//! //    2   3
//! let tree = TreeNode::with_children(1, Some(TreeNode::new(2)), Some(TreeNode::new(3)));
//!
//! assert_eq!(traversal::sum_leaf_nodes(Some(&tree)), 5);
//! assert_eq!(traversal::collect_level_order_values(Some(&tree)), vec![&1, &2, &3]);
//! assert_eq!(traversal::build_post_order_string(Some(&tree)), "231");
//! ```

pub mod display;
pub mod iter;
pub mod traversal;
pub mod tree;
pub mod util;

pub use display::ToTreeString;
pub use tree::TreeNode;
