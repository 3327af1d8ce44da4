//! An unordered binary tree. This is the "tree shape" topic: values are placed by walking down
//! from the root (smaller values to the left, everything else to the right) but the tree offers
//! no search or delete. See [`search_tree`][crate::search_tree] for those.
//!
//! # Examples
//!
//! ```
//! use dsdict::binary_tree::Tree;
//!
//! // A tree always starts with its root.
//! let mut tree = Tree::new(5);
//!
//! tree.insert(3);
//! tree.insert(8);
//! tree.insert(3);
//!
//! // Duplicates are kept, and always land to the right.
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [3, 3, 5, 8]);
//! ```

use crate::node::{Inorder, Node};

/// A binary tree holding at least one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    root: Box<Node>,
}

impl Tree {
    /// Generate a new `Tree` with a single node holding `root`.
    pub fn new(root: i32) -> Self {
        Self {
            root: Node::new_boxed(root),
        }
    }

    /// Inserts `value` as a new leaf. Values strictly less than a node's value go to its left,
    /// all others (ties included) go to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsdict::binary_tree::Tree;
    ///
    /// let mut tree = Tree::new(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.root().left().map(|n| n.value()), Some(1));
    /// ```
    pub fn insert(&mut self, value: i32) {
        self.root.insert(value);
    }

    /// A lazy inorder traversal of the tree's values. Each call starts a fresh traversal.
    pub fn iter(&self) -> Inorder<'_> {
        Inorder::new(Some(&self.root))
    }

    /// The node at the top of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// A `Tree` is never empty. This exists to pair with [`Tree::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The number of levels in the tree. A lone root has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Inorder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
