//! The interactive dictionary. A [`Session`] reads topic names, collects integers for the
//! chosen topic, runs the matching data structure and writes out what happened.
//!
//! It is generic over its input and output so it can be driven from a terminal or from a
//! buffer.
//!
//! # Examples
//!
//! ```
//! use dsdict::session::{Config, Session};
//!
//! let input = "min heap\n5 3 8 1 4 -1\nexit\n";
//! let mut output = Vec::new();
//!
//! Session::new(input.as_bytes(), &mut output, Config::default())
//!     .run()
//!     .unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("Min Heap: 1 3 8 5 4"));
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use thiserror::Error;

use crate::heap::{Heap, HeapKind};
use crate::topic::Topic;
use crate::{binary_tree, search_tree};

const BANNER: &str = "
     ************************************************
     *    WELCOME TO OUR MINI DIGITAL DICTIONARY    *
     ************************************************
";

/// Settings for a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// The value that ends a list of integers. It can never be inserted into anything.
    pub sentinel: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self { sentinel: -1 }
    }
}

/// Everything that can go wrong while talking to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading from the input or writing to the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The input ran out while a single answer was still needed.
    #[error("input ended while waiting for {expected}")]
    UnexpectedEof {
        /// What was being asked for.
        expected: &'static str,
    },
}

/// One run of the dictionary over an input and an output.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Shows the menu and answers topic lookups until the user types `exit` or the input ends.
    pub fn run(&mut self) -> Result<(), Error> {
        info!("starting session with sentinel {}", self.config.sentinel);
        self.write_menu()?;

        loop {
            write!(
                self.output,
                "\n\nEnter a topic to learn about (or type 'exit' to quit): "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let term = line.trim();
            if term.eq_ignore_ascii_case("exit") {
                break;
            }

            self.lookup(term)?;
        }

        writeln!(self.output)?;
        info!("session finished");
        Ok(())
    }

    /// Explains and demonstrates the topic named by `term`, or says there's no such topic.
    pub fn lookup(&mut self, term: &str) -> Result<(), Error> {
        match term.parse::<Topic>() {
            Ok(topic) => {
                debug!("looking up {topic}");
                self.explain(topic)
            }
            Err(e) => {
                debug!("{e}");
                writeln!(self.output, "Topic not found.")?;
                Ok(())
            }
        }
    }

    fn explain(&mut self, topic: Topic) -> Result<(), Error> {
        writeln!(self.output, "\n{}: {}", topic.name(), topic.summary())?;

        match topic {
            Topic::BinaryTree => self.binary_tree(),
            Topic::BinarySearchTree => self.search_tree(),
            Topic::Heapify => self.heapify(),
            Topic::MinHeap => self.heap(HeapKind::Min),
            Topic::MaxHeap => self.heap(HeapKind::Max),
        }
    }

    fn binary_tree(&mut self) -> Result<(), Error> {
        let values = self.read_values("Enter values for Binary Tree")?;
        let Some((&root, rest)) = values.split_first() else {
            writeln!(self.output, "No values entered.")?;
            return Ok(());
        };

        let mut tree = binary_tree::Tree::new(root);
        for &value in rest {
            tree.insert(value);
        }

        writeln!(self.output, "Inorder Traversal: {}", render(&tree))?;
        writeln!(
            self.output,
            "Nodes: {}, Height: {}",
            tree.len(),
            tree.height()
        )?;
        Ok(())
    }

    fn search_tree(&mut self) -> Result<(), Error> {
        let values = self.read_values("Enter values for Binary Search Tree")?;
        let Some((&root, rest)) = values.split_first() else {
            writeln!(self.output, "No values entered.")?;
            return Ok(());
        };

        let mut tree = search_tree::Tree::new(root);
        for &value in rest {
            tree.insert(value);
        }
        writeln!(self.output, "Inorder Traversal: {}", render(&tree))?;

        let needle = self.read_integer("\nEnter a value to search for: ", "a value to search for")?;
        let status = if tree.contains(needle) {
            "Found"
        } else {
            "Not Found"
        };
        writeln!(self.output, "Search for {needle}: [STATUS] {status}")?;

        let key = self.read_integer("\nEnter a value to delete: ", "a value to delete")?;
        if !tree.delete(key) {
            writeln!(self.output, "{key} is not in the tree.")?;
        }
        writeln!(
            self.output,
            "Inorder Traversal after deletion: {}",
            render(&tree)
        )?;
        Ok(())
    }

    fn heapify(&mut self) -> Result<(), Error> {
        let values = self.read_values("Enter values for array")?;
        let choice = self.read_integer(
            "\nChoose heap type: \n1. Min Heap\n2. Max Heap\n\nEnter 1 or 2: ",
            "a heap type",
        )?;

        let kind = match choice {
            1 => HeapKind::Min,
            2 => HeapKind::Max,
            _ => {
                writeln!(self.output, "Invalid choice.")?;
                return Ok(());
            }
        };
        self.write_heap(values, kind)
    }

    fn heap(&mut self, kind: HeapKind) -> Result<(), Error> {
        let values = self.read_values(&format!("Enter values for {kind}"))?;
        self.write_heap(values, kind)
    }

    fn write_heap(&mut self, values: Vec<i32>, kind: HeapKind) -> Result<(), Error> {
        writeln!(self.output, "The values you inputted: {}", render(&values))?;
        let heap = Heap::build(kind, values);
        writeln!(self.output, "{kind}: {}", render(heap.as_slice()))?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<(), Error> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "     ************************************************")?;
        writeln!(self.output, "     *   You can search for the following topics:   *")?;
        writeln!(self.output, "     ************************************************")?;
        for topic in Topic::ALL {
            writeln!(self.output, "     *{:^46}*", "")?;
            writeln!(self.output, "     *{:^46}*", topic.name())?;
        }
        writeln!(self.output, "     *{:^46}*", "")?;
        writeln!(self.output, "     ************************************************")?;
        Ok(())
    }

    /// Collects integers until the sentinel. Anything after the sentinel on the same line is
    /// dropped. Running out of input ends the list just like the sentinel would.
    fn read_values(&mut self, prompt: &str) -> Result<Vec<i32>, Error> {
        let sentinel = self.config.sentinel;
        write!(
            self.output,
            "\n{prompt} (space-separated, end with {sentinel}): "
        )?;
        self.output.flush()?;

        let mut values = Vec::new();
        while let Some(line) = self.read_line()? {
            for token in line.split_whitespace() {
                match token.parse::<i32>() {
                    Ok(value) if value == sentinel => {
                        debug!("collected {values:?}");
                        return Ok(values);
                    }
                    Ok(value) => values.push(value),
                    Err(e) => {
                        warn!("skipping {token:?}: {e}");
                        writeln!(self.output, "Skipping invalid integer: {token}")?;
                    }
                }
            }
        }

        debug!("input ended, collected {values:?}");
        Ok(values)
    }

    /// Reads a single integer, asking again until one is given. Only the first token of a line
    /// is looked at.
    fn read_integer(&mut self, prompt: &str, expected: &'static str) -> Result<i32, Error> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        loop {
            let line = self
                .read_line()?
                .ok_or(Error::UnexpectedEof { expected })?;
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };

            match token.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!("asking again after {token:?}: {e}");
                    write!(self.output, "Please enter an integer: ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// The next line of input, or `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Space separated values, or `(empty)` when there are none.
fn render<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<i32>,
{
    use std::borrow::Borrow;

    let rendered = values
        .into_iter()
        .map(|v| v.borrow().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if rendered.is_empty() {
        "(empty)".to_string()
    } else {
        rendered
    }
}
