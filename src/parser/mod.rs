//! Parser
//!
//! Builds nested-list trees from the scanner's token stream.

mod sexpr_parser;
mod tree;

pub use sexpr_parser::SExprParser;
pub use tree::{drop_nodes, Atom, Leaves, Node, Tree};

use crate::error::Result;
use crate::lexer::Token;

/// Parser options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of lists open at once (`None` = unbounded)
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    /// Reject input nesting deeper than `max_depth` lists
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Parse `tokens` into a tree
pub fn parse(tokens: Vec<Token>) -> Result<Tree> {
    SExprParser::new(tokens).parse()
}

/// Parse `tokens` into a tree under the given options
pub fn parse_with(tokens: Vec<Token>, options: ParseOptions) -> Result<Tree> {
    SExprParser::with_options(tokens, options).parse()
}
