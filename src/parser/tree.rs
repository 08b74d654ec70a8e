//! Nested-list tree built by the parser

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::{Operator, Token};

/// Payload of a leaf: a non-structural token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atom {
    /// Letters-only identifier
    Symbol(String),
    /// Non-negative integer
    Integer(u64),
    /// Single-character operator
    Operator(Operator),
}

impl TryFrom<Token> for Atom {
    type Error = Token;

    /// Structural tokens have no payload and are handed back unchanged
    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::Symbol(text) => Ok(Atom::Symbol(text)),
            Token::Integer(n) => Ok(Atom::Integer(n)),
            Token::Operator(op) => Ok(Atom::Operator(op)),
            Token::Open | Token::Close => Err(token),
        }
    }
}

impl From<Atom> for Token {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Symbol(text) => Token::Symbol(text),
            Atom::Integer(n) => Token::Integer(n),
            Atom::Operator(op) => Token::Operator(op),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom::Symbol(text) => write!(f, "{}", text),
            Atom::Integer(n) => write!(f, "{}", n),
            Atom::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// A tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Node without children
    Leaf(Atom),
    /// One matched parenthesis span
    List(Vec<Node>),
}

impl Node {
    /// Leaf holding a symbol
    pub fn symbol(text: impl Into<String>) -> Self {
        Node::Leaf(Atom::Symbol(text.into()))
    }

    /// Leaf holding an integer
    pub fn integer(value: u64) -> Self {
        Node::Leaf(Atom::Integer(value))
    }

    /// Leaf holding an operator
    pub fn operator(op: Operator) -> Self {
        Node::Leaf(Atom::Operator(op))
    }

    /// List of the given children
    pub fn list(children: impl IntoIterator<Item = Node>) -> Self {
        Node::List(children.into_iter().collect())
    }

    /// The atom of a leaf
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Node::Leaf(atom) => Some(atom),
            Node::List(_) => None,
        }
    }

    /// The children of a list
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    /// Check if node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Nesting depth: 0 for a leaf, 1 + deepest child for a list
    pub fn depth(&self) -> usize {
        max_depth(std::iter::once(self))
    }

    /// Atoms under this node, left to right
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            pending: vec![self],
        }
    }

    /// Number of atoms under this node
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Node::Leaf(atom)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf(atom) => write!(f, "{}", atom),
            Node::List(children) => {
                f.write_str("(")?;
                write_sequence(f, children)?;
                f.write_str(")")
            }
        }
    }
}

/// Space-separated elements. A trailing operator keeps its terminating
/// space so the text scans back to the same tokens.
fn write_sequence(f: &mut fmt::Formatter, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", node)?;
    }
    if let Some(Node::Leaf(Atom::Operator(_))) = nodes.last() {
        f.write_str(" ")?;
    }
    Ok(())
}

fn max_depth<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&Node, usize)> = nodes.into_iter().map(|node| (node, 0)).collect();

    while let Some((node, enclosing)) = pending.pop() {
        if let Node::List(children) = node {
            let depth = enclosing + 1;
            deepest = deepest.max(depth);
            pending.extend(children.iter().map(|child| (child, depth)));
        }
    }

    deepest
}

/// Depth-first, left-to-right iterator over the atoms of a tree
pub struct Leaves<'a> {
    pending: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Atom;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.pending.pop() {
            match node {
                Node::Leaf(atom) => return Some(atom),
                Node::List(children) => self.pending.extend(children.iter().rev()),
            }
        }
        None
    }
}

/// Parse result: the top-level sequence of forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    forms: Vec<Node>,
}

impl Tree {
    /// Creates a tree from top-level forms
    pub fn new(forms: Vec<Node>) -> Self {
        Tree { forms }
    }

    /// Top-level forms in input order
    pub fn forms(&self) -> &[Node] {
        &self.forms
    }

    /// Number of top-level forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Check if there are no top-level forms
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterates over the top-level forms
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.forms.iter()
    }

    /// Takes the top-level forms out of the tree.
    ///
    /// The returned nodes drop recursively; release very deep ones with
    /// [`drop_nodes`].
    pub fn into_forms(mut self) -> Vec<Node> {
        std::mem::take(&mut self.forms)
    }

    /// The whole tree as a single list node.
    ///
    /// Like [`Tree::into_forms`], the node drops recursively.
    pub fn into_node(self) -> Node {
        Node::List(self.into_forms())
    }

    /// Maximum number of lists open at once; 0 when there are no lists
    pub fn depth(&self) -> usize {
        max_depth(&self.forms)
    }

    /// Atoms of every form, left to right
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            pending: self.forms.iter().rev().collect(),
        }
    }

    /// Number of atoms in the tree
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

impl From<Vec<Node>> for Tree {
    fn from(forms: Vec<Node>) -> Self {
        Tree::new(forms)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_sequence(f, &self.forms)
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        drop_nodes(std::mem::take(&mut self.forms));
    }
}

/// Drops `nodes` without recursing, however deeply they nest
pub fn drop_nodes(nodes: Vec<Node>) {
    let mut pending = nodes;
    while let Some(node) = pending.pop() {
        if let Node::List(children) = node {
            pending.extend(children);
        }
    }
}
