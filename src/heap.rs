//! Array backed binary heaps built with bottom-up heapify.
//!
//! A heap here is a dense `Vec<i32>` read as a complete binary tree in level order: the children
//! of index `i` live at `2i + 1` and `2i + 2`. A min-heap keeps every parent `<=` its children,
//! a max-heap keeps every parent `>=` its children.
//!
//! Heaps are always built wholesale from a sequence. There is no `push` or `pop`.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `build`      | O(n)       |
//! | `sift_down`  | O(log n)   |
//! | `peek`       | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use dsdict::heap::Heap;
//!
//! let min = Heap::min_from(vec![5, 3, 8, 1, 4]);
//! assert_eq!(min.as_slice(), [1, 3, 8, 5, 4]);
//!
//! let max = Heap::max_from(vec![5, 3, 8, 1, 4]);
//! assert_eq!(max.as_slice(), [8, 4, 5, 1, 3]);
//! ```

use std::fmt;

/// Which way a [`Heap`] is ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeapKind {
    /// The smallest value is at the root.
    Min,
    /// The largest value is at the root.
    Max,
}

impl HeapKind {
    /// Whether `a` belongs above `b` in a heap of this kind. Equal values never need to move.
    fn outranks(self, a: i32, b: i32) -> bool {
        match self {
            Self::Min => a < b,
            Self::Max => a > b,
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("Min Heap"),
            Self::Max => f.write_str("Max Heap"),
        }
    }
}

/// A binary heap of `i32`s stored in level order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heap {
    kind: HeapKind,
    data: Vec<i32>,
}

impl Heap {
    /// Builds a heap of the given kind out of `values`.
    ///
    /// The values are taken as they are and then repaired bottom-up: every index from the last
    /// parent (`n / 2 - 1`) back to the root is sifted down. Building from nothing gives an
    /// empty heap.
    pub fn build(kind: HeapKind, values: impl Into<Vec<i32>>) -> Self {
        let mut heap = Self {
            kind,
            data: values.into(),
        };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Builds a min-heap out of `values`.
    pub fn min_from(values: impl Into<Vec<i32>>) -> Self {
        Self::build(HeapKind::Min, values)
    }

    /// Builds a max-heap out of `values`.
    pub fn max_from(values: impl Into<Vec<i32>>) -> Self {
        Self::build(HeapKind::Max, values)
    }

    /// Moves the element at `index` down until neither of its children outranks it.
    ///
    /// When both children outrank the element the more extreme one is swapped up. If the
    /// children tie, the left one is used.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut extreme = index;

            if left < len && self.kind.outranks(self.data[left], self.data[extreme]) {
                extreme = left;
            }
            if right < len && self.kind.outranks(self.data[right], self.data[extreme]) {
                extreme = right;
            }

            if extreme == index {
                break;
            }
            self.data.swap(index, extreme);
            index = extreme;
        }
    }

    /// Whether this is a min-heap or a max-heap.
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// The heap in level order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Consumes the heap returning its level order `Vec`.
    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    /// The root of the heap: the smallest value of a min-heap or the largest of a max-heap.
    pub fn peek(&self) -> Option<i32> {
        self.data.first().copied()
    }

    /// How many values are in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap has no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks every parent/child pair against the heap's ordering.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.kind.outranks(self.data[child], self.data[parent])
        })
    }
}
