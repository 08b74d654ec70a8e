//! # lisptree - LISP-like expressions to nested-list trees
//!
//! A small reader front-end for an interpreter or compiler. It turns text such as
//! `(foo (bar 1 2) + )` into an owned nested-list [`Tree`] in two stages:
//!
//! ```text
//! Source Text → Scanner → Tokens → Parser → Tree
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use lisptree::{read, Node};
//!
//! # fn main() -> lisptree::Result<()> {
//! let tree = read("(foo (bar))")?;
//!
//! assert_eq!(
//!     tree.forms(),
//!     &[Node::list([Node::symbol("foo"), Node::list([Node::symbol("bar")])])]
//! );
//! assert_eq!(tree.depth(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! The stages can also be driven separately:
//!
//! ```rust
//! use lisptree::{Operator, Parser, Scanner, Token};
//!
//! # fn main() -> lisptree::Result<()> {
//! let mut scanner = Scanner::new("(+ 1 2)");
//! let tokens = scanner.scan_tokens()?;
//! assert_eq!(tokens[1], Token::Operator(Operator::Plus));
//!
//! let tree = Parser::new(tokens).parse()?;
//! assert_eq!(tree.leaf_count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Syntax
//!
//! - **Symbols**: runs of ASCII letters, `foo`, `setQ`
//! - **Integers**: runs of ASCII digits, non-negative, up to `u64::MAX`
//! - **Operators**: one of `! % * + - < = > ^ ~`, always followed by exactly one space
//! - **Lists**: `( ... )`, arbitrarily nested
//! - **Separators**: the plain space only; tabs and newlines are rejected
//!
//! There are no strings, quotes, comments, floats or negative literals.
//!
//! ## Error Handling
//!
//! Malformed input aborts the whole read with a single [`Error`]:
//!
//! ```rust
//! use lisptree::{read, Error, Imbalance, ParseError, ScanError};
//!
//! assert!(matches!(
//!     read("(a\tb)"),
//!     Err(Error::Scan(ScanError::UnrecognizedCharacter { ch: '\t', .. }))
//! ));
//! assert!(matches!(
//!     read("(+)"),
//!     Err(Error::Scan(ScanError::MissingOperatorTerminator { .. }))
//! ));
//! assert!(matches!(
//!     read("(a))"),
//!     Err(Error::Parse(ParseError::UnbalancedParentheses(
//!         Imbalance::UnexpectedClose { .. }
//!     )))
//! ));
//! ```
//!
//! ## Logging
//!
//! Scanning and parsing emit [`tracing`] events (`trace` per token, `debug`
//! summaries and aborts). No subscriber is installed by this crate.

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{Error, Imbalance, ParseError, Result, ScanError};
pub use lexer::{scan, Operator, SExprScanner, Token};
pub use parser::{
    drop_nodes, parse, parse_with, Atom, Leaves, Node, ParseOptions, SExprParser, Tree,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Type alias for the scanner
pub type Scanner = SExprScanner;

/// Type alias for the parser
pub type Parser = SExprParser;

/// Scan and parse `source` in one step
pub fn read(source: &str) -> Result<Tree> {
    parse(scan(source)?)
}

/// Scan and parse `source` under the given parser options
pub fn read_with(source: &str, options: ParseOptions) -> Result<Tree> {
    parse_with(scan(source)?, options)
}
