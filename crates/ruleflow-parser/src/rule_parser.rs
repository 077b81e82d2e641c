//! Recursive-descent rule parser
//!
//! Precedence: AND binds tighter than OR, so `a OR b AND c` parses as
//! `OR(a, AND(b, c))`. Chains of the same connective are left-associative:
//! `a AND b AND c` parses as `AND(AND(a, b), c)`. Parentheses override both.

use crate::error::{ParseError, Result};
use crate::token::{tokenize, Token};
use ruleflow_core::ast::{CompareOp, Connective, Node};
use ruleflow_core::types::Literal;

/// Rule-string parser
pub struct RuleParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl RuleParser {
    /// Parse a rule string into an AST
    pub fn parse(input: &str) -> Result<Node> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyRule);
        }

        let tokens = tokenize(input)?;
        log::debug!("parsing rule string ({} tokens)", tokens.len());

        let mut parser = RuleParser { tokens, pos: 0 };
        let node = parser.parse_or()?;

        // A leftover ')' means an opening paren was never seen
        match parser.peek() {
            None => Ok(node),
            Some(Token::RParen) => Err(ParseError::UnbalancedParentheses),
            Some(token) => Err(ParseError::UnexpectedToken(token.describe())),
        }
    }

    /// or_expr := and_expr ( OR and_expr )*
    fn parse_or(&mut self) -> Result<Node> {
        let mut left = self.parse_and()?;
        while self.eat_connective(Connective::Or) {
            let right = self.parse_and()?;
            left = Node::operator(Connective::Or, left, right);
        }
        Ok(left)
    }

    /// and_expr := primary ( AND primary )*
    fn parse_and(&mut self) -> Result<Node> {
        let mut left = self.parse_primary()?;
        while self.eat_connective(Connective::And) {
            let right = self.parse_primary()?;
            left = Node::operator(Connective::And, left, right);
        }
        Ok(left)
    }

    /// primary := '(' expr ')' | condition
    fn parse_primary(&mut self) -> Result<Node> {
        match self.peek() {
            Some(Token::LParen) => {
                self.advance();
                if matches!(self.peek(), Some(Token::RParen)) {
                    return Err(ParseError::EmptyGroup);
                }
                let node = self.parse_or()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(node),
                    _ => Err(ParseError::UnbalancedParentheses),
                }
            }
            _ => self.parse_condition(),
        }
    }

    /// condition := attribute compare_op literal
    fn parse_condition(&mut self) -> Result<Node> {
        let attribute = match self.advance() {
            Some(Token::Word(word)) => {
                if Connective::from_keyword(&word).is_some()
                    || CompareOp::from_symbol(&word).is_some()
                    || !is_valid_attribute(&word)
                {
                    return Err(ParseError::InvalidAttribute(word));
                }
                word
            }
            Some(token) => return Err(ParseError::UnexpectedToken(token.describe())),
            None => {
                return Err(ParseError::IncompleteCondition {
                    expected: "attribute name".to_string(),
                })
            }
        };

        let op = match self.advance() {
            Some(Token::Word(word)) => CompareOp::from_symbol(&word)
                .ok_or(ParseError::InvalidOperator(word))?,
            Some(token) => return Err(ParseError::UnexpectedToken(token.describe())),
            None => {
                return Err(ParseError::IncompleteCondition {
                    expected: "comparison operator".to_string(),
                })
            }
        };

        let value = match self.advance() {
            Some(Token::Quoted(s)) => Literal::String(s),
            Some(Token::Word(word)) => {
                // A connective here means the literal was left out entirely
                if Connective::from_keyword(&word).is_some() {
                    return Err(ParseError::IncompleteCondition {
                        expected: "literal value".to_string(),
                    });
                }
                Literal::from_token(&word)
            }
            Some(token) => return Err(ParseError::UnexpectedToken(token.describe())),
            None => {
                return Err(ParseError::IncompleteCondition {
                    expected: "literal value".to_string(),
                })
            }
        };

        Ok(Node::condition(attribute, op, value))
    }

    /// Consume the next token if it is the given connective (case-insensitive)
    fn eat_connective(&mut self, connective: Connective) -> bool {
        if let Some(Token::Word(word)) = self.peek() {
            if Connective::from_keyword(word) == Some(connective) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}

fn is_valid_attribute(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
