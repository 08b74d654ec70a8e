use super::tree::{drop_nodes, Atom, Node, Tree};
use super::ParseOptions;
use crate::error::{Imbalance, ParseError, Result};
use crate::lexer::Token;

/// Recursive-descent parser from tokens to a nested-list tree
///
/// Each nesting level owns its own accumulator. An `Open` parks the current
/// accumulator and starts a fresh one; the matching `Close` hands the finished
/// child back to its parent as a single list node. The descent uses an explicit
/// stack of parked accumulators instead of the call stack.
pub struct SExprParser {
    tokens: Vec<Token>,
    options: ParseOptions,
}

impl SExprParser {
    /// Creates a parser with default options
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    /// Creates a parser that enforces `options`
    pub fn with_options(tokens: Vec<Token>, options: ParseOptions) -> Self {
        SExprParser { tokens, options }
    }

    /// Parses the tokens into a tree, consuming every token
    pub fn parse(self) -> Result<Tree> {
        let token_count = self.tokens.len();

        match self.build() {
            Ok(tree) => {
                tracing::debug!(
                    tokens = token_count,
                    forms = tree.len(),
                    depth = tree.depth(),
                    "parsed token stream"
                );
                Ok(tree)
            }
            Err(err) => {
                tracing::debug!(error = %err, "parse aborted");
                Err(err.into())
            }
        }
    }

    fn build(self) -> std::result::Result<Tree, ParseError> {
        let mut enclosing: Vec<Vec<Node>> = Vec::new();
        let mut level: Vec<Node> = Vec::new();

        if let Err(err) = self.descend(&mut level, &mut enclosing) {
            // Partial lists can nest arbitrarily deep; release them without recursion
            drop_nodes(level);
            enclosing.into_iter().for_each(drop_nodes);
            return Err(err);
        }

        Ok(Tree::new(level))
    }

    fn descend(
        self,
        level: &mut Vec<Node>,
        enclosing: &mut Vec<Vec<Node>>,
    ) -> std::result::Result<(), ParseError> {
        let limit = self.options.max_depth;

        for (index, token) in self.tokens.into_iter().enumerate() {
            match token {
                Token::Open => {
                    if let Some(limit) = limit {
                        if enclosing.len() >= limit {
                            return Err(ParseError::NestingTooDeep { limit, index });
                        }
                    }
                    enclosing.push(std::mem::take(level));
                }
                Token::Close => {
                    let parent = enclosing.pop().ok_or(ParseError::UnbalancedParentheses(
                        Imbalance::UnexpectedClose { index },
                    ))?;
                    let child = std::mem::replace(level, parent);
                    level.push(Node::List(child));
                }
                Token::Symbol(text) => level.push(Node::Leaf(Atom::Symbol(text))),
                Token::Integer(n) => level.push(Node::Leaf(Atom::Integer(n))),
                Token::Operator(op) => level.push(Node::Leaf(Atom::Operator(op))),
            }
        }

        if !enclosing.is_empty() {
            return Err(ParseError::UnbalancedParentheses(Imbalance::UnclosedOpen {
                unclosed: enclosing.len(),
            }));
        }

        Ok(())
    }
}
