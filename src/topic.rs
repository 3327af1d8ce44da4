//! The topics the dictionary knows about.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A data structure topic the user can ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// An unordered binary tree.
    BinaryTree,
    /// An ordered binary tree supporting search and delete.
    BinarySearchTree,
    /// Turning an arbitrary array into a heap of either kind.
    Heapify,
    /// A heap with the smallest value at the root.
    MinHeap,
    /// A heap with the largest value at the root.
    MaxHeap,
}

/// Returned when a string doesn't name any [`Topic`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("topic not found: {0:?}")]
pub struct UnknownTopic(
    /// The text that was looked up.
    pub String,
);

impl Topic {
    /// Every topic, in menu order.
    pub const ALL: [Topic; 5] = [
        Topic::BinaryTree,
        Topic::BinarySearchTree,
        Topic::Heapify,
        Topic::MinHeap,
        Topic::MaxHeap,
    ];

    /// The name shown in the menu. Parsing this (in any case) gives back the topic.
    pub fn name(self) -> &'static str {
        match self {
            Topic::BinaryTree => "Binary Tree",
            Topic::BinarySearchTree => "Binary Search Tree",
            Topic::Heapify => "Heapify",
            Topic::MinHeap => "Min Heap",
            Topic::MaxHeap => "Max Heap",
        }
    }

    /// A short explanation of the topic.
    pub fn summary(self) -> &'static str {
        match self {
            Topic::BinaryTree => {
                "A binary tree is a tree data structure where each node has at most two \
                 children, referred to as the left child and the right child."
            }
            Topic::BinarySearchTree => {
                "A binary search tree is a binary tree where the left child node contains a \
                 value smaller than its parent, and the right child contains a value greater."
            }
            Topic::Heapify => {
                "Heapify is the process of converting an array into a heap data structure, \
                 maintaining the heap property (either min-heap or max-heap)."
            }
            Topic::MinHeap => {
                "A min-heap is a binary tree where the parent node is less than or equal to its \
                 children, and the smallest element is at the root."
            }
            Topic::MaxHeap => {
                "A max-heap is a binary tree where the parent node is greater than or equal to \
                 its children, and the largest element is at the root."
            }
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = UnknownTopic;

    /// Matches a topic name ignoring case. Leading and trailing whitespace is ignored and runs of
    /// whitespace between words count as a single space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");

        Topic::ALL
            .into_iter()
            .find(|topic| topic.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}
