//! Non-recursive iterators over a binary tree.
//!
//! Depth-first variants keep an explicit stack that mimics the call stack of
//! the recursive traversals; the breadth-first variant keeps a FIFO queue.
//! All three borrow the tree immutably and can be restarted at will.

use std::collections::VecDeque;

use crate::tree::TreeNode;

/// Depth-first iterator, parent before children, left subtree first.
pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub(crate) fn new(root: &'a TreeNode<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push right before left so the left subtree comes out first
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Depth-first iterator, children before parent, left subtree first.
///
/// Each node is pushed twice: once to descend into its subtrees and once,
/// flagged as visited, to be yielded after them.
pub struct PostOrderIter<'a, T> {
    stack: Vec<(&'a TreeNode<T>, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    pub(crate) fn new(root: &'a TreeNode<T>) -> Self {
        Self {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Breadth-first iterator, level by level, left to right within a level.
pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    pub(crate) fn new(root: &'a TreeNode<T>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some(node)
    }
}
