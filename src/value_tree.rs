//! A binary tree of strings with no ordering between nodes. The caller decides the shape.
//!
//! Trees can be written out with [`Node::serialize`] and read back with [`Node::deserialize`].
//! The format is fixed down to the whitespace:
//!
//! ```text
//! { "val": "<value>", "left": <node or null>, "right": <node or null> }
//! ```
//!
//! Inside a value, `"` and `\` are written as `\"` and `\\`. Nothing else is escaped and no other
//! escape is accepted.
//!
//! # Examples
//!
//! ```
//! use classic_ds::value_tree::Node;
//!
//! let tree = Node::new("root")
//!     .with_left(Node::new("left").with_left(Node::new("left.left")))
//!     .with_right(Node::new("right"));
//!
//! let serialized = tree.serialize();
//! assert_eq!(Node::deserialize(&serialized), Ok(tree));
//! ```

use std::fmt::{self, Write as _};
use std::str::FromStr;

use log::debug;

const OPEN: &str = "{ \"val\": \"";
const LEFT: &str = "\", \"left\": ";
const RIGHT: &str = ", \"right\": ";
const CLOSE: &str = " }";
const NULL: &str = "null";

/// Deepest nesting `deserialize` accepts. The root is at depth 1.
pub const MAX_NESTING: usize = 1024;

/// A node in a value tree. Two trees are equal when they have the same shape and the same value
/// at every position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    value: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Creates a childless node holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
        }
    }

    /// Replaces this node's left child.
    pub fn with_left(mut self, left: Node) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces this node's right child.
    pub fn with_right(mut self, right: Node) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// The value stored in this node.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// This node's left child, if it has one.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// This node's right child, if it has one.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Writes the tree in the textual format described in the [module docs](self). This is the
    /// same as the `Display` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::value_tree::Node;
    ///
    /// let tree = Node::new("root").with_left(Node::new("left"));
    ///
    /// assert_eq!(
    ///     tree.serialize(),
    ///     r#"{ "val": "root", "left": { "val": "left", "left": null, "right": null }, "right": null }"#
    /// );
    /// ```
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Reads a tree written by [`serialize`][Node::serialize]. Anything that doesn't match the
    /// format exactly, including trailing input, is rejected, as is anything nested deeper than
    /// [`MAX_NESTING`].
    ///
    /// # Errors
    ///
    /// A [`ParseError`] pointing at the first byte that couldn't be parsed.
    pub fn deserialize(input: &str) -> Result<Self, ParseError> {
        Parser::new(input).parse().map_err(|e| {
            debug!("Rejected value tree input of {} bytes: {}", input.len(), e);
            e
        })
    }

    /// Counts the subtrees (leaves included) in which every node holds the same value. This is a
    /// single bottom up pass over the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::value_tree::Node;
    ///
    /// let tree = Node::new("a")
    ///     .with_left(Node::new("a"))
    ///     .with_right(Node::new("b"));
    ///
    /// // Both leaves, but not the root.
    /// assert_eq!(tree.count_unival_subtrees(), 2);
    /// ```
    pub fn count_unival_subtrees(&self) -> usize {
        self.unival_subtrees().0
    }

    /// Returns how many unival subtrees are rooted at or below this node along with whether the
    /// subtree rooted here is one of them.
    fn unival_subtrees(&self) -> (usize, bool) {
        let mut count = 0;
        let mut unival = true;
        for child in self.children() {
            let (child_count, child_unival) = child.unival_subtrees();
            count += child_count;
            unival &= child_unival && child.value == self.value;
        }

        if unival {
            count += 1;
        }
        (count, unival)
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.left().into_iter().chain(self.right())
    }
}

impl fmt::Display for Node {
    // TODO stack based Display
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OPEN)?;
        for c in self.value.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_str(LEFT)?;
        write_child(f, self.left())?;
        f.write_str(RIGHT)?;
        write_child(f, self.right())?;
        f.write_str(CLOSE)
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: Option<&Node>) -> fmt::Result {
    match child {
        Some(node) => fmt::Display::fmt(node, f),
        None => f.write_str(NULL),
    }
}

impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s)
    }
}

/// Why some input couldn't be read as a value tree. Positions are byte offsets into the input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input didn't continue with the expected piece of the format.
    #[error("expected {expected:?} at byte {position}")]
    Expected {
        /// The text that should have been there.
        expected: &'static str,
        /// Where it should have started.
        position: usize,
    },
    /// A value was opened but the input ended before its closing quote.
    #[error("unterminated value starting at byte {position}")]
    UnterminatedString {
        /// Where the value's contents start.
        position: usize,
    },
    /// A backslash inside a value was followed by something other than `"` or `\`.
    #[error("invalid escape sequence at byte {position}")]
    InvalidEscape {
        /// Where the backslash is.
        position: usize,
    },
    /// The input nests nodes deeper than [`MAX_NESTING`].
    #[error("nodes nested too deeply at byte {position}")]
    TooDeep {
        /// Where the first node past the limit starts.
        position: usize,
    },
    /// A complete tree was read but more input followed it.
    #[error("unexpected input after the tree at byte {position}")]
    TrailingInput {
        /// Where the extra input starts.
        position: usize,
    },
}

/// Recursive descent over the serialized format. Each method consumes exactly the piece of
/// grammar it is named after and leaves `position` just past it.
struct Parser<'a> {
    input: &'a str,
    position: usize,
    /// How many nodes enclose the current position.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            depth: 0,
        }
    }

    fn parse(mut self) -> Result<Node, ParseError> {
        let node = self.node()?;
        if self.position != self.input.len() {
            return Err(ParseError::TrailingInput {
                position: self.position,
            });
        }

        Ok(node)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn expect(&mut self, literal: &'static str) -> Result<(), ParseError> {
        if self.rest().starts_with(literal) {
            self.position += literal.len();
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: literal,
                position: self.position,
            })
        }
    }

    fn node(&mut self) -> Result<Node, ParseError> {
        if self.depth == MAX_NESTING {
            return Err(ParseError::TooDeep {
                position: self.position,
            });
        }
        self.depth += 1;
        self.expect(OPEN)?;
        let value = self.value()?;
        self.expect(LEFT)?;
        let left = self.child()?;
        self.expect(RIGHT)?;
        let right = self.child()?;
        self.expect(CLOSE)?;

        self.depth -= 1;

        Ok(Node { value, left, right })
    }

    fn child(&mut self) -> Result<Option<Box<Node>>, ParseError> {
        if self.rest().starts_with(NULL) {
            self.position += NULL.len();
            Ok(None)
        } else if self.rest().starts_with(OPEN) {
            self.node().map(|node| Some(Box::new(node)))
        } else {
            Err(ParseError::Expected {
                expected: "a node or null",
                position: self.position,
            })
        }
    }

    /// Reads an escaped value up to, but not including, its closing quote.
    fn value(&mut self) -> Result<String, ParseError> {
        let start = self.position;
        let mut value = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '"' => {
                    self.position = start + offset;
                    return Ok(value);
                }
                '\\' => match chars.next() {
                    Some((_, escaped @ ('"' | '\\'))) => value.push(escaped),
                    Some(_) => {
                        return Err(ParseError::InvalidEscape {
                            position: start + offset,
                        })
                    }
                    None => break,
                },
                c => value.push(c),
            }
        }

        Err(ParseError::UnterminatedString { position: start })
    }
}
