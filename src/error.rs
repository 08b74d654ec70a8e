//! Error types for the scanner and parser

use std::fmt;

use thiserror::Error;

use crate::lexer::Operator;

/// Errors raised while turning source text into tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Character outside the accepted alphabet
    ///
    /// **Triggered by:** anything other than a space, a parenthesis, an operator,
    /// an ASCII digit or an ASCII letter
    /// **Example:** `(a\tb)` (tab), `(a . b)` (dot)
    #[error("Unrecognized character {ch:?} at offset {offset}")]
    UnrecognizedCharacter {
        /// The offending character
        ch: char,
        /// Character offset into the source
        offset: usize,
    },

    /// Operator not followed by exactly one space
    ///
    /// **Triggered by:** an operator directly followed by another character or by end of input
    /// **Example:** `(+ 1 +)`, `+`
    /// **Prevention:** Always write a space after an operator, even before `)`
    #[error("Operator '{operator}' at offset {offset} must be followed by a space")]
    MissingOperatorTerminator {
        /// The operator that was scanned
        operator: Operator,
        /// Character offset of the operator
        offset: usize,
    },

    /// Digit run too large for the integer representation
    #[error("Integer literal {literal} at offset {offset} does not fit in 64 bits")]
    IntegerOutOfRange {
        /// Digits as written
        literal: String,
        /// Character offset of the first digit
        offset: usize,
    },
}

/// Which way the parentheses failed to balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imbalance {
    /// A `)` with no open list to close
    UnexpectedClose {
        /// Index of the `Close` token in the token stream
        index: usize,
    },
    /// Input ended while lists were still open
    UnclosedOpen {
        /// Number of lists left open
        unclosed: usize,
    },
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Imbalance::UnexpectedClose { index } => {
                write!(f, "unexpected `)` at token {}", index)
            }
            Imbalance::UnclosedOpen { unclosed } => {
                write!(f, "{} list(s) left open at end of input", unclosed)
            }
        }
    }
}

/// Errors raised while building a tree from tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Open and close tokens do not pair up
    ///
    /// **Triggered by:** an extra `)` or a missing `)`
    /// **Example:** `(a b))`, `(a (b)`
    #[error("Unbalanced parentheses: {0}")]
    UnbalancedParentheses(Imbalance),

    /// Nesting went past the limit set in [`crate::ParseOptions`]
    #[error("Nesting depth exceeds the limit of {limit} at token {index}")]
    NestingTooDeep {
        /// Configured maximum number of simultaneously open lists
        limit: usize,
        /// Index of the `Open` token that crossed the limit
        index: usize,
    },
}

/// Reader errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure while scanning
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Failure while parsing
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// The scan failure, if this error came from the scanner
    pub fn as_scan(&self) -> Option<&ScanError> {
        match self {
            Error::Scan(err) => Some(err),
            Error::Parse(_) => None,
        }
    }

    /// The parse failure, if this error came from the parser
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Scan(_) => None,
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;
