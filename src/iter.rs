//! Iterators over a [`Tree`](crate::Tree).
//!
//! [`Preorder`] is lazy and drives its own explicit stack, so it never
//! recurses no matter how skewed the tree is. [`Inorder`] is eager: it
//! collects the whole ascending sequence up front and then hands out
//! references one at a time. The eager form is fine because its only
//! callers want the full result at once; a future postorder or level-order
//! iterator should copy the `Preorder` pattern instead.

use crate::node::Node;

/// A lazy preorder traversal of a tree.
///
/// Yields the root, then the left subtree, then the right subtree. A
/// `Preorder` is single-pass; obtain a fresh one from
/// [`Tree::iter`](crate::Tree::iter) to restart.
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped (and therefore
        // visited) before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.item)
    }
}

/// An eager inorder traversal of a tree, yielding items in ascending order.
pub struct Inorder<'a, T> {
    items: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut items = Vec::new();
        let mut stack = Vec::new();
        let mut cur = root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                items.push(&node.item);
                cur = node.right.as_deref();
            }
        }
        Self {
            items: items.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for Inorder<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}
