use super::token::{Operator, Token};
use crate::error::{Result, ScanError};

/// Scanner for LISP-like symbolic expressions
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl SExprScanner {
    /// Creates a new scanner over `source`
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens from the source and returns them in input order.
    ///
    /// The scanner is spent afterwards: a second call returns an empty vector.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            if let Err(err) = self.scan_token() {
                tracing::debug!(error = %err, "scan aborted");
                return Err(err);
            }
        }

        tracing::debug!(
            chars = self.source.len(),
            tokens = self.tokens.len(),
            "scanned source"
        );

        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            '(' => self.add_token(Token::Open),
            ')' => self.add_token(Token::Close),

            // Only the plain space separates tokens; tabs and newlines are rejected
            ' ' => {}

            c => match Operator::from_char(c) {
                Some(operator) => self.scan_operator(operator)?,
                None if c.is_ascii_digit() => self.scan_integer()?,
                None if c.is_ascii_alphabetic() => self.scan_symbol(),
                None => {
                    return Err(ScanError::UnrecognizedCharacter {
                        ch: c,
                        offset: self.start,
                    }
                    .into());
                }
            },
        }

        Ok(())
    }

    fn scan_operator(&mut self, operator: Operator) -> Result<()> {
        // Exactly one space terminates an operator, including at end of a list
        if !self.match_char(' ') {
            return Err(ScanError::MissingOperatorTerminator {
                operator,
                offset: self.start,
            }
            .into());
        }

        self.add_token(Token::Operator(operator));
        Ok(())
    }

    fn scan_integer(&mut self) -> Result<()> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = self.lexeme();
        let value: u64 = text.parse().map_err(|_| ScanError::IntegerOutOfRange {
            literal: text.clone(),
            offset: self.start,
        })?;

        self.add_token(Token::Integer(value));
        Ok(())
    }

    fn scan_symbol(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }

        let text = self.lexeme();
        self.add_token(Token::Symbol(text));
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, token: Token) {
        tracing::trace!(offset = self.start, token = %token, "token");
        self.tokens.push(token);
    }
}
