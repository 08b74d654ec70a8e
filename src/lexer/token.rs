use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-character operators recognized by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `!`
    Bang,
    /// `%`
    Percent,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `<`
    Lt,
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `^`
    Caret,
    /// `~`
    Tilde,
}

impl Operator {
    /// Every operator, in ASCII order of its character
    pub const ALL: [Operator; 10] = [
        Operator::Bang,
        Operator::Percent,
        Operator::Star,
        Operator::Plus,
        Operator::Minus,
        Operator::Lt,
        Operator::Eq,
        Operator::Gt,
        Operator::Caret,
        Operator::Tilde,
    ];

    /// Look up the operator spelled by `c`
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '!' => Some(Operator::Bang),
            '%' => Some(Operator::Percent),
            '*' => Some(Operator::Star),
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '<' => Some(Operator::Lt),
            '=' => Some(Operator::Eq),
            '>' => Some(Operator::Gt),
            '^' => Some(Operator::Caret),
            '~' => Some(Operator::Tilde),
            _ => None,
        }
    }

    /// The character this operator is written as
    pub fn as_char(self) -> char {
        match self {
            Operator::Bang => '!',
            Operator::Percent => '%',
            Operator::Star => '*',
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Lt => '<',
            Operator::Eq => '=',
            Operator::Gt => '>',
            Operator::Caret => '^',
            Operator::Tilde => '~',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// All possible tokens. Tokens carry no source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Left parenthesis, starts a nested list
    Open,
    /// Right parenthesis, ends a nested list
    Close,
    /// Maximal run of ASCII letters
    Symbol(String),
    /// Maximal run of ASCII digits
    Integer(u64),
    /// One of `! % * + - < = > ^ ~`
    Operator(Operator),
}

impl Token {
    /// Check if token only delimits structure
    pub fn is_structural(&self) -> bool {
        matches!(self, Token::Open | Token::Close)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Symbol(text) => write!(f, "{}", text),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}
