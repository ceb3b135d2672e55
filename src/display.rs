use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::tree::TreeNode;

/// Conversion into a renderable [`termtree::Tree`] for terminal display.
pub trait ToTreeString {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display> ToTreeString for TreeNode<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        // The root of the Tree<String> is this node's value
        let root = self.value.to_string();

        // Recursively construct the present children
        let leaves: Vec<_> = [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
