//! A Binary Search Tree (BST) over `i32`s. No balancing is done so the height of the tree, and
//! so the cost of every operation, depends on insertion order.
//!
//! Insertion uses exactly the same rule as [`binary_tree`][crate::binary_tree]: strictly
//! smaller values go left and everything else goes right. That rule is what maintains the BST
//! invariant, which is what makes [`Tree::contains`] and [`Tree::delete`] meaningful here.
//!
//! # Examples
//!
//! ```
//! use dsdict::search_tree::Tree;
//!
//! let mut tree = Tree::new(5);
//! for x in [3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert!(tree.contains(4));
//! assert!(!tree.contains(9));
//!
//! // Deleting a node returns whether there was anything to delete.
//! assert!(tree.delete(3));
//! assert!(!tree.delete(3));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 4, 5, 8]);
//! ```

use std::cmp::Ordering;

use crate::node::{self, Inorder, Link, Node};

/// A Binary Search Tree. For every node, every value in its left subtree is smaller than its
/// own value and every value in its right subtree is greater than or equal to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
}

impl Tree {
    /// Generate a new `Tree` with a single node holding `root`.
    pub fn new(root: i32) -> Self {
        Self {
            root: Some(Node::new_boxed(root)),
        }
    }

    /// Generate a new, empty `Tree`.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Inserts `value` into the tree. Inserting a value that is already present adds another
    /// node for it in the right subtree of the existing one.
    pub fn insert(&mut self, value: i32) {
        node::insert(&mut self.root, value);
    }

    /// Returns whether any node in the tree holds `value`. This only looks along the single
    /// path the BST invariant allows so it takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsdict::search_tree::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(n) = current {
            current = match value.cmp(&n.value) {
                Ordering::Equal => return true,
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
            };
        }

        false
    }

    /// Deletes one node holding `key`, returning whether such a node existed. If the tree does
    /// not contain `key`, nothing happens. See [`delete`] for how the tree is reshaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsdict::search_tree::Tree;
    ///
    /// let mut tree = Tree::new(1);
    ///
    /// assert!(tree.delete(1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: i32) -> bool {
        delete_from(&mut self.root, key)
    }

    /// A lazy inorder traversal of the tree's values, which comes out in non-decreasing order.
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Inorder<'_> {
        Inorder::new(self.root.as_deref())
    }

    /// The node at the top of the tree, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<i32> {
        self.root.as_deref().map(min_value)
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::len)
    }

    /// Whether the tree has no nodes. This only happens for [`Tree::empty`] or after deleting
    /// every value.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::empty();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Inorder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Tree> for Link {
    /// Hands over the tree's nodes, e.g. to feed [`delete`].
    fn from(tree: Tree) -> Self {
        tree.root
    }
}

/// Removes the first node holding `key` found on the search path from `link` and returns the
/// new root of the subtree. If no such node is found the subtree comes back unchanged.
///
/// - A node without a left child is replaced by its right child (which may be nothing).
/// - A node without a right child is replaced by its left child.
/// - A node with two children takes the value of its inorder successor (the smallest value in
///   its right subtree) and that successor is then removed from the right subtree.
///
/// # Examples
///
/// ```
/// use dsdict::node::Link;
/// use dsdict::search_tree::{self, Tree};
///
/// let tree: Tree = [5, 3, 8].into_iter().collect();
/// let root = search_tree::delete(Link::from(tree), 5);
///
/// // 8 was the successor of 5 so it moves up to the root.
/// assert_eq!(root.as_deref().map(|n| n.value()), Some(8));
///
/// // Nothing to remove, nothing changes.
/// let root = search_tree::delete(root, 42);
/// assert_eq!(root.as_deref().and_then(|n| n.left()).map(|n| n.value()), Some(3));
/// ```
pub fn delete(mut link: Link, key: i32) -> Link {
    delete_from(&mut link, key);
    link
}

/// Walks the search path for `key` and unlinks the first node holding it. Returns whether a node
/// was removed.
fn delete_from(link: &mut Link, key: i32) -> bool {
    let mut cursor = link;
    loop {
        let Some(ordering) = cursor.as_deref().map(|n| key.cmp(&n.value)) else {
            return false;
        };
        if ordering == Ordering::Equal {
            unlink(cursor);
            return true;
        }
        if let Some(node) = cursor {
            cursor = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

/// Replaces the node in `slot` by what should take its place once it's gone.
fn unlink(slot: &mut Link) {
    let Some(mut node) = slot.take() else {
        return;
    };

    *slot = match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (left, mut right) => {
            // `right` is not empty here, so there is always a successor.
            if let Some(successor) = take_min(&mut right) {
                node.value = successor;
            }
            node.left = left;
            node.right = right;
            Some(node)
        }
    };
}

/// Detaches the leftmost node under `link`, moving its right child into its place, and returns
/// its value. That node is the first one holding the minimum on the search path for it.
fn take_min(link: &mut Link) -> Option<i32> {
    let mut cursor = link;
    while cursor.as_deref().is_some_and(|n| n.left.is_some()) {
        if let Some(node) = cursor {
            cursor = &mut node.left;
        }
    }

    let mut node = cursor.take()?;
    *cursor = node.right.take();
    Some(node.value)
}

/// The value of the leftmost node beneath (and including) `node`.
fn min_value(node: &Node) -> i32 {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current.value
}

#[cfg(test)]
/// Asserts the BST invariant holds for every node in the tree.
pub(crate) fn assert_ordered(tree: &Tree) {
    fn check(node: Option<&Node>, lower: Option<i32>, upper: Option<i32>) {
        let Some(n) = node else {
            return;
        };
        if let Some(lower) = lower {
            assert!(n.value >= lower, "{} is left of its ancestor {}", n.value, lower);
        }
        if let Some(upper) = upper {
            assert!(n.value < upper, "{} is right of its ancestor {}", n.value, upper);
        }
        check(n.left(), lower, Some(n.value));
        check(n.right(), Some(n.value), upper);
    }

    check(tree.root(), None, None);
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a multiset of counts.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same values, as many times, in both.
    fn do_ops(ops: &[Op], bst: &mut Tree, counts: &mut BTreeMap<i32, usize>) {
        for op in ops {
            match *op {
                Op::Insert(x) => {
                    bst.insert(x);
                    *counts.entry(x).or_default() += 1;
                }
                Op::Remove(x) => {
                    let before = bst.len();
                    let expected = match counts.get_mut(&x) {
                        Some(count) => {
                            *count -= 1;
                            if *count == 0 {
                                counts.remove(&x);
                            }
                            true
                        }
                        None => false,
                    };
                    assert_eq!(bst.delete(x), expected);
                    assert_eq!(bst.len() + usize::from(expected), before);
                }
                Op::Iter => {
                    let expected = counts
                        .iter()
                        .flat_map(|(x, n)| std::iter::repeat(*x).take(*n));
                    assert!(bst.iter().eq(expected));
                }
            }
        }
    }

    #[quickcheck]
    fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
        let mut tree = Tree::empty();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        counts.keys().all(|x| tree.contains(*x))
    }

    #[quickcheck]
    fn deletes_keep_invariant(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
        for x in deletes {
            tree.delete(i32::from(x));
            assert_ordered(&tree);
        }
        true
    }
}
