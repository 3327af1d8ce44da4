//! The node shape shared by [`binary_tree`][crate::binary_tree] and
//! [`search_tree`][crate::search_tree].
//!
//! Every `Node` is owned by exactly one parent (or by the tree handle for the
//! root) through a [`Link`]. There are no parent pointers so dropping a `Link`
//! drops the whole subtree beneath it.
//!
//! Nothing rebalances, so sorted input turns a tree into a chain as long as the input. Every
//! walk over a tree here (including `Drop`, `Clone` and `PartialEq`) uses an explicit stack or
//! cursor rather than recursion so chain length is bounded by memory, not by the call stack.

use std::fmt;

/// An owning, possibly empty, pointer to a subtree.
pub type Link = Option<Box<Node>>;

/// A single value with up to two children.
pub struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Construct a new childless `Node` holding `value`.
    pub(crate) fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Inserts `value` somewhere beneath this node. Values strictly less than a node's value go
    /// left, everything else (including ties) goes right.
    ///
    /// This walks down iteratively so a degenerate (sorted) insertion order can't blow the stack.
    pub(crate) fn insert(&mut self, value: i32) {
        let child = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        insert(child, value);
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// How many nodes are in the subtree rooted at this node.
    pub(crate) fn len(&self) -> usize {
        Inorder::new(Some(self)).count()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped so each drop only ever sees a leaf.
        let mut stack: Vec<Box<Node>> = self.left.take().into_iter().collect();
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut root = Node::new(self.value);
        let mut stack = vec![(self, &mut root)];
        while let Some((src, dst)) = stack.pop() {
            if let Some(left) = src.left() {
                stack.push((left, &mut **dst.left.insert(Node::new_boxed(left.value))));
            }
            if let Some(right) = src.right() {
                stack.push((right, &mut **dst.right.insert(Node::new_boxed(right.value))));
            }
        }
        root
    }
}

impl PartialEq for Node {
    /// Two subtrees are equal when they have the same shape and the same value at every
    /// position.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    // Only the values, in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("inorder", &Inorder::new(Some(self)))
            .finish()
    }
}

/// Inserts `value` into the subtree behind `link`, filling the first empty slot on its path.
pub(crate) fn insert(link: &mut Link, value: i32) {
    let mut cursor = link;
    while let Some(node) = cursor {
        cursor = if value < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *cursor = Some(Node::new_boxed(value));
}

/// A lazy inorder (left subtree, node, right subtree) iterator over the values of a subtree.
///
/// It keeps the path of nodes whose left subtrees are still being visited, so it never
/// allocates more than `O(height)` entries.
#[derive(Clone)]
pub struct Inorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Inorder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value)
    }
}

impl std::iter::FusedIterator for Inorder<'_> {}

impl fmt::Debug for Inorder<'_> {
    /// Lists the values this traversal has yet to yield.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Builds `0, 1, .., len - 1` as a chain of right children without walking it once per value.
#[cfg(test)]
pub(crate) fn chain(len: i32) -> Link {
    let mut link = None;
    for value in (0..len).rev() {
        let mut node = Node::new_boxed(value);
        node.right = link;
        link = Some(node);
    }
    link
}
