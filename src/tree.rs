//! The [`Tree`] container and its operations.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{TreeError, TreeResult};
use crate::iter::{Inorder, Preorder};
use crate::node::{Link, Node};

/// An ordered set of items backed by a Binary Search Tree.
///
/// Items only need to implement [`Ord`]. Equal items are stored at most
/// once, so the container behaves like a set. The tree never rebalances
/// itself on insertion or removal; call [`Tree::rebalance`] to restore
/// minimal height after skewed input.
///
/// Every operation is iterative, including teardown, so even a fully
/// degenerate tree (one long chain) cannot overflow the call stack.
///
/// # Examples
///
/// ```
/// use bst_set::Tree;
///
/// let mut tree = Tree::new();
///
/// // Nothing in here yet.
/// assert_eq!(tree.find(&1), None);
///
/// tree.add(1);
/// assert!(tree.contains(&1));
///
/// // Removing an item returns it.
/// assert_eq!(tree.remove(&1), Ok(1));
/// assert_eq!(tree.find(&1), None);
/// ```
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of items in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Makes the tree empty.
    ///
    /// The node graph is torn down with an explicit stack: each node has its
    /// children detached before it is dropped, so freeing a degenerate chain
    /// cannot overflow the call stack.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Adds `item` to the tree. Adding an item equal to one already stored
    /// leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match item.cmp(&node.item) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                Ordering::Equal => return,
            }
        }
        *cur = Some(Box::new(Node::new(item)));
        self.size += 1;
    }

    /// Removes the item equal to `item` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ItemNotFound`] if no stored item compares equal
    /// to `item`; the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{Tree, TreeError};
    ///
    /// let mut tree: Tree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&3), Ok(3));
    /// assert_eq!(tree.remove(&3), Err(TreeError::ItemNotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, item: &T) -> TreeResult<T>
    where
        T: Ord,
    {
        // Descend to the link that holds the target. Working on links
        // instead of nodes means splicing the root out needs no special
        // case, and no parent pointers have to be maintained.
        let mut slot = &mut self.root;
        loop {
            let step = match slot.as_deref() {
                None => return Err(TreeError::ItemNotFound),
                Some(node) => item.cmp(&node.item),
            };
            match step {
                Ordering::Equal => break,
                Ordering::Less => {
                    if let Some(node) = slot {
                        slot = &mut node.left;
                    }
                }
                Ordering::Greater => {
                    if let Some(node) = slot {
                        slot = &mut node.right;
                    }
                }
            }
        }

        let removed = splice(slot);
        self.size -= 1;
        Ok(removed)
    }

    /// If an item equal to `item` is stored, returns a reference to the
    /// stored item, which may be distinguishable from the query even though
    /// it compares equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match item.cmp(&node.item) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.item),
            }
        }
        None
    }

    /// Returns `true` if an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// If an item equal to `item` is stored, overwrites it with `new_item`
    /// and returns the previous item. Returns `None`, changing nothing,
    /// when there is no match.
    ///
    /// `new_item` must compare equal to `item`; the ordering of the tree is
    /// not rechecked.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree: Tree<String> = ["Rust".to_string()].into_iter().collect();
    ///
    /// let previous = tree.replace(&"Rust".to_string(), "Rust".to_string());
    /// assert_eq!(previous.as_deref(), Some("Rust"));
    /// assert_eq!(tree.replace(&"Go".to_string(), "Go".to_string()), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match item.cmp(&node.item) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal => return Some(mem::replace(&mut node.item, new_item)),
            }
        }
        None
    }

    /// Returns the height of the tree: the edge count of the longest path
    /// from the root to a leaf. An empty tree and a single-node tree both
    /// have height 0.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        max_depth
    }

    /// Heuristic balance check: the tree counts as balanced iff
    /// `2 * log2(len + 1) - 1 > height()`.
    ///
    /// The bound is loose on purpose. It flags trees whose height is far
    /// from the minimum possible for their size, which is when
    /// [`Tree::rebalance`] pays off. An empty tree reports `false`.
    pub fn is_balanced(&self) -> bool {
        2.0 * ((self.size + 1) as f64).log2() - 1.0 > self.height() as f64
    }

    /// Returns a lazy preorder traversal of the tree.
    ///
    /// A single traversal is single-pass; call `iter` again for a fresh one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let preorder: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(preorder, [5, 3, 1, 4, 8]);
    /// ```
    pub fn iter(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Returns the items of the tree in ascending order.
    ///
    /// This traversal is eager: the whole sequence is collected before the
    /// iterator is handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let sorted: Vec<_> = tree.inorder().copied().collect();
    /// assert_eq!(sorted, [1, 3, 4, 5, 8]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// Returns, in ascending order, every stored item within `[low, high]`.
    /// A missing bound means unbounded on that side, so
    /// `range_find(None, None)` returns the full ascending contents.
    ///
    /// Subtrees that provably lie outside the bounds are never visited:
    /// the descent goes left of a node only while `low < node`, and right
    /// only while `node < high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(Some(&4), Some(&8)), [&4, &5, &7, &8]);
    /// assert_eq!(tree.range_find(None, Some(&3)), [&1, &3]);
    /// ```
    pub fn range_find(&self, low: Option<&T>, high: Option<&T>) -> Vec<&T>
    where
        T: Ord,
    {
        let mut found = Vec::new();
        let mut stack = Vec::new();
        push_left_edge(self.root.as_deref(), low, &mut stack);
        while let Some(node) = stack.pop() {
            // Pops come out ascending, so the first item past `high` ends
            // the whole query.
            if high.map_or(false, |hi| *hi < node.item) {
                break;
            }
            if low.map_or(true, |lo| *lo <= node.item) {
                found.push(&node.item);
            }
            if high.map_or(true, |hi| node.item < *hi) {
                push_left_edge(node.right.as_deref(), low, &mut stack);
            }
        }
        found
    }

    /// Rebuilds the tree into a minimal-height shape.
    ///
    /// The sorted contents are snapshotted, the tree is cleared, and the
    /// items are re-added by repeated median splits: the middle of each
    /// sorted run becomes the subtree root for that run. The set of stored
    /// items is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree: Tree<i32> = (0..15).collect();
    /// assert_eq!(tree.height(), 14);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let mut items: Vec<Option<T>> = self.take_sorted().into_iter().map(Some).collect();
        let mut pending = vec![0..items.len()];
        while let Some(range) = pending.pop() {
            if range.is_empty() {
                continue;
            }
            let mid = range.start + range.len() / 2;
            if let Some(item) = items[mid].take() {
                self.add(item);
            }
            pending.push(range.start..mid);
            pending.push(mid + 1..range.end);
        }
    }

    /// Returns the smallest stored item greater than `item`, or `None` if
    /// there is no such item. `item` itself does not have to be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&3), Some(&5));
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut above = self.range_find(Some(item), None).into_iter();
        match above.next() {
            Some(first) if first == item => above.next(),
            first => first,
        }
    }

    /// Returns the largest stored item smaller than `item`, or `None` if
    /// there is no such item. `item` itself does not have to be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&3));
    /// assert_eq!(tree.predecessor(&4), Some(&3));
    /// assert_eq!(tree.predecessor(&3), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut below = self.range_find(None, Some(item)).into_iter().rev();
        match below.next() {
            Some(last) if last == item => below.next(),
            last => last,
        }
    }

    /// Moves every item out of the tree into an ascending `Vec`, leaving
    /// the tree empty. Nodes are consumed with an explicit stack, children
    /// detached before their parent drops.
    fn take_sorted(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.size);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut cur = self.root.take();
        self.size = 0;
        while cur.is_some() || !stack.is_empty() {
            while let Some(mut node) = cur {
                cur = node.left.take();
                stack.push(node);
            }
            if let Some(mut node) = stack.pop() {
                cur = node.right.take();
                items.push(node.item);
            }
        }
        items
    }
}

/// Removes the node held by `slot` and returns its item. `slot` must hold a
/// node.
///
/// A node with two children keeps its place in the graph: the item of its
/// in-order predecessor (the maximum of its left subtree) is lifted into it
/// and the predecessor's node is spliced out instead. A node with fewer
/// children is replaced by its only child, or by nothing.
fn splice<T>(slot: &mut Link<T>) -> T {
    let mut node = slot.take().expect("splice is called on an occupied link");
    if node.left.is_some() && node.right.is_some() {
        let pred = detach_max(&mut node.left);
        let removed = mem::replace(&mut node.item, pred.item);
        *slot = Some(node);
        removed
    } else {
        *slot = node.left.take().or_else(|| node.right.take());
        node.item
    }
}

/// Detaches the maximum node of a non-empty subtree, reattaching the
/// detached node's left child (it cannot have a right child) in its place.
fn detach_max<T>(link: &mut Link<T>) -> Box<Node<T>> {
    let mut cur = link;
    loop {
        let has_right = cur.as_deref().map_or(false, |node| node.right.is_some());
        if !has_right {
            break;
        }
        if let Some(node) = cur {
            cur = &mut node.right;
        }
    }
    let mut max = cur.take().expect("detach_max is given a non-empty subtree");
    *cur = max.left.take();
    max
}

/// Pushes `cur` and its left spine onto `stack`, stopping early once a
/// node's left subtree cannot contain anything `>= low`.
fn push_left_edge<'a, T: Ord>(
    mut cur: Option<&'a Node<T>>,
    low: Option<&T>,
    stack: &mut Vec<&'a Node<T>>,
) {
    while let Some(node) = cur {
        stack.push(node);
        cur = match low {
            Some(lo) if node.item <= *lo => None,
            _ => node.left.as_deref(),
        };
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

/// Renders the tree rotated 90 degrees counterclockwise: the right subtree
/// on top, one `"| "` per level of depth.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut cur = self.root.as_deref().map(|node| (node, 0));
        while cur.is_some() || !stack.is_empty() {
            while let Some((node, depth)) = cur {
                stack.push((node, depth));
                cur = node.right.as_deref().map(|right| (right, depth + 1));
            }
            if let Some((node, depth)) = stack.pop() {
                for _ in 0..depth {
                    f.write_str("| ")?;
                }
                writeln!(f, "{}", node.item)?;
                cur = node.left.as_deref().map(|left| (left, depth + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The inorder sequence of a BST with distinct items is strictly
    /// ascending exactly when the order invariant holds everywhere.
    fn assert_bst_order<T: Ord>(tree: &Tree<T>) {
        let items: Vec<_> = tree.inorder().collect();
        assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(items.len(), tree.len());
    }

    #[test]
    fn add_and_find() {
        let mut tree = Tree::new();
        assert_eq!(tree.find(&1), None);

        tree.add(1);
        assert_eq!(tree.find(&1), Some(&1));
        assert_eq!(tree.find(&2), None);
        assert!(tree.contains(&1));
        assert!(!tree.contains(&2));
    }

    #[test]
    fn add_equal_item_is_a_no_op() {
        let mut tree = Tree::new();
        tree.add(5);
        tree.add(5);
        tree.add(5);

        assert_eq!(tree.len(), 1);
        assert_bst_order(&tree);
    }

    #[test]
    fn always_adding_left() {
        let items = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

        let mut tree = Tree::new();
        for item in items {
            tree.add(item);
            assert_bst_order(&tree);
        }
        for item in items {
            assert!(tree.contains(&item));
        }
        assert_eq!(tree.height(), 9);
    }

    #[test]
    fn always_adding_right() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        let mut tree = Tree::new();
        for item in items {
            tree.add(item);
            assert_bst_order(&tree);
        }
        for item in items {
            assert!(tree.contains(&item));
        }
        assert_eq!(tree.height(), 9);
    }

    #[test]
    fn remove_missing_item() {
        let mut tree: Tree<i32> = [5, 3, 8].into_iter().collect();

        assert_eq!(tree.remove(&4), Err(TreeError::ItemNotFound));
        assert_eq!(tree.len(), 3);

        let mut empty: Tree<i32> = Tree::new();
        assert_eq!(empty.remove(&4), Err(TreeError::ItemNotFound));
    }

    #[test]
    fn remove_with_no_children() {
        let mut tree: Tree<i32> = [5, 3, 7].into_iter().collect();

        assert_eq!(tree.remove(&7), Ok(7));
        assert_eq!(tree.find(&7), None);

        assert_eq!(tree.find(&3), Some(&3));
        assert_eq!(tree.find(&5), Some(&5));
        assert_bst_order(&tree);
    }

    #[test]
    fn remove_with_null_left() {
        let mut tree: Tree<i32> = [5, 3, 7, 9].into_iter().collect();

        assert_eq!(tree.remove(&7), Ok(7));
        assert_eq!(tree.find(&7), None);

        assert_eq!(tree.find(&9), Some(&9));
        assert_bst_order(&tree);
    }

    #[test]
    fn remove_with_null_right() {
        let mut tree: Tree<i32> = [5, 3, 7, 6].into_iter().collect();

        assert_eq!(tree.remove(&7), Ok(7));
        assert_eq!(tree.find(&7), None);

        assert_eq!(tree.find(&6), Some(&6));
        assert_bst_order(&tree);
    }

    #[test]
    fn remove_with_left_predecessor() {
        let mut tree: Tree<i32> = [5, 3, 7, 6, 8].into_iter().collect();

        assert_eq!(tree.remove(&7), Ok(7));
        assert_eq!(tree.find(&7), None);

        for kept in [3, 5, 6, 8] {
            assert_eq!(tree.find(&kept), Some(&kept));
        }
        assert_bst_order(&tree);
    }

    #[test]
    fn remove_with_deeper_predecessor() {
        let mut tree: Tree<i32> = [5, 3, 8, 2, 6, 9, 7].into_iter().collect();

        assert_eq!(tree.remove(&8), Ok(8));
        assert_eq!(tree.find(&8), None);

        for kept in [2, 3, 5, 6, 7, 9] {
            assert_eq!(tree.find(&kept), Some(&kept));
        }
        assert_bst_order(&tree);
    }

    #[test]
    fn remove_root() {
        let mut tree = Tree::new();
        tree.add(5);

        assert_eq!(tree.remove(&5), Ok(5));
        assert_eq!(tree.find(&5), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn remove_root_with_two_children() {
        let mut tree: Tree<i32> = [5, 3, 8].into_iter().collect();

        assert_eq!(tree.remove(&5), Ok(5));
        let items: Vec<_> = tree.inorder().copied().collect();
        assert_eq!(items, [3, 8]);
        assert_bst_order(&tree);
    }

    #[test]
    fn replace_swaps_in_place() {
        let mut tree: Tree<String> = Tree::new();
        tree.extend(["one".to_string(), "two".to_string()]);

        // Equal-comparing items can still be distinguishable allocations.
        // Replace keeps the shape and size while swapping the stored item.
        let fresh = "two".to_string();
        assert_eq!(tree.replace(&"two".to_string(), fresh), Some("two".to_string()));
        assert_eq!(tree.replace(&"three".to_string(), "three".to_string()), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn height_of_empty_and_leaf() {
        let mut tree = Tree::new();
        assert_eq!(tree.height(), 0);

        tree.add(1);
        assert_eq!(tree.height(), 0);

        tree.add(2);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn balance_heuristic() {
        // The formula is 2 * log2(len + 1) - 1 > height, strictly.
        let empty: Tree<i32> = Tree::new();
        assert!(!empty.is_balanced());

        let single: Tree<i32> = [1].into_iter().collect();
        assert!(single.is_balanced());

        let chain: Tree<i32> = (1..=7).collect();
        assert!(!chain.is_balanced());

        let bushy: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        assert!(bushy.is_balanced());
    }

    #[test]
    fn preorder_is_lazy_root_first() {
        let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        let preorder: Vec<_> = tree.iter().copied().collect();
        assert_eq!(preorder, [5, 3, 1, 4, 8, 7, 9]);

        // `&Tree` iterates the same way, and a fresh traversal restarts.
        let again: Vec<_> = (&tree).into_iter().copied().collect();
        assert_eq!(again, preorder);
    }

    #[test]
    fn inorder_is_ascending() {
        let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        let items: Vec<_> = tree.inorder().copied().collect();
        assert_eq!(items, [1, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn scenario_insert_remove_find() {
        let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        assert_eq!(tree.height(), 2);

        assert_eq!(tree.remove(&3), Ok(3));
        assert_eq!(tree.find(&3), None);
        assert_eq!(tree.len(), 6);
        assert_bst_order(&tree);
    }

    #[test]
    fn range_find_bounded() {
        let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        assert_eq!(tree.range_find(Some(&4), Some(&8)), [&4, &5, &7, &8]);
        assert_eq!(tree.range_find(Some(&4), None), [&4, &5, &7, &8, &9]);
        assert_eq!(tree.range_find(None, Some(&4)), [&1, &3, &4]);
        assert_eq!(
            tree.range_find(None, None),
            [&1, &3, &4, &5, &7, &8, &9],
        );
        assert!(tree.range_find(Some(&10), None).is_empty());
        assert!(tree.range_find(Some(&6), Some(&6)).is_empty());
    }

    #[test]
    fn range_find_reaches_inner_subtrees() {
        // 7 sits to the right of an out-of-range node. Pruning must cut at
        // the node where the bound decides, not at its child, or 7 is lost.
        let tree: Tree<i32> = [10, 3, 7].into_iter().collect();

        assert_eq!(tree.range_find(Some(&5), None), [&7, &10]);
    }

    #[test]
    fn range_find_on_empty_tree() {
        let tree: Tree<i32> = Tree::new();
        assert!(tree.range_find(Some(&1), Some(&9)).is_empty());
        assert!(tree.range_find(None, None).is_empty());
    }

    #[test]
    fn rebalance_sorted_chain() {
        let mut tree: Tree<i32> = (1..=7).collect();
        assert_eq!(tree.height(), 6);

        tree.rebalance();

        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());
        let items: Vec<_> = tree.inorder().copied().collect();
        assert_eq!(items, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn rebalance_trivial_trees() {
        let mut empty: Tree<i32> = Tree::new();
        empty.rebalance();
        assert!(empty.is_empty());

        let mut single: Tree<i32> = [1].into_iter().collect();
        single.rebalance();
        assert_eq!(single.len(), 1);
        assert_eq!(single.height(), 0);
        assert!(single.is_balanced());
    }

    #[test]
    fn successor_and_predecessor() {
        let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        assert_eq!(tree.successor(&5), Some(&7));
        assert_eq!(tree.successor(&6), Some(&7));
        assert_eq!(tree.successor(&9), None);

        assert_eq!(tree.predecessor(&5), Some(&4));
        assert_eq!(tree.predecessor(&6), Some(&5));
        assert_eq!(tree.predecessor(&1), None);

        let empty: Tree<i32> = Tree::new();
        assert_eq!(empty.successor(&1), None);
        assert_eq!(empty.predecessor(&1), None);
    }

    #[test]
    fn clear_empties_the_tree() {
        let mut tree: Tree<i32> = (1..=100).collect();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.find(&1), None);

        // The tree is usable afterwards.
        tree.add(1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn deep_degenerate_tree_does_not_overflow() {
        // One long right chain, built link by link so the test doesn't pay
        // the quadratic cost of 200k chained adds. Every operation,
        // teardown included, has to survive this shape.
        let mut tree: Tree<u32> = Tree::new();
        for item in (0..200_000).rev() {
            let mut node = Box::new(Node::new(item));
            node.right = tree.root.take();
            tree.root = Some(node);
            tree.size += 1;
        }

        assert_eq!(tree.height(), 199_999);
        assert!(tree.contains(&199_999));
        assert_eq!(tree.inorder().count(), 200_000);
        assert_eq!(tree.iter().count(), 200_000);
        assert_eq!(tree.range_find(Some(&10), Some(&12)), [&10, &11, &12]);

        tree.rebalance();
        assert_eq!(tree.height(), 17);

        drop(tree);
    }

    #[test]
    fn debug_formats_as_set() {
        let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    #[test]
    fn display_rotates_the_tree() {
        let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
        assert_eq!(tree.to_string(), "| 8\n5\n| 3\n");

        let empty: Tree<i32> = Tree::new();
        assert_eq!(empty.to_string(), "");
    }
}
