use crate::iter::{LevelOrderIter, PostOrderIter, PreOrderIter};

/// One node of a strict binary tree.
///
/// Each node exclusively owns its two optional subtrees; `None` marks an
/// absent child. Exclusive `Box` ownership makes sharing and cycles
/// unconstructible, so traversals need no arena or index indirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// Value stored at this node
    pub value: T,
    /// Left subtree, `None` if absent
    pub left: Option<Box<TreeNode<T>>>,
    /// Right subtree, `None` if absent
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a node with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node wired to the given subtrees.
    pub fn with_children(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// A leaf has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Depth-first iterator visiting each node before its children (pre-order).
    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    /// Depth-first iterator visiting each node after its children (post-order).
    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self)
    }

    /// Breadth-first iterator, level by level, left to right within a level.
    pub fn iter_levelorder(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self)
    }
}
