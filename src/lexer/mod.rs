//! Lexical analysis
//!
//! Converts source text into a stream of tokens for LISP-like S-expressions.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{Operator, Token};

use crate::error::Result;

/// Scan `source` into tokens
pub fn scan(source: &str) -> Result<Vec<Token>> {
    SExprScanner::new(source).scan_tokens()
}
