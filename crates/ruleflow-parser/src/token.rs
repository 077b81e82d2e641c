//! Rule-string tokenizer
//!
//! Splits a rule string on whitespace and parenthesis boundaries. Parentheses
//! are their own tokens; a single- or double-quoted run (which may contain
//! spaces) becomes one `Quoted` token with the quotes stripped; everything
//! else is a `Word`.

use crate::error::{ParseError, Result};

/// A single token of a rule string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Unquoted word: attribute, operator symbol, connective, or bare literal
    Word(String),
    /// Quoted string literal, quotes stripped
    Quoted(String),
}

impl Token {
    /// Display form used in error messages
    pub fn describe(&self) -> String {
        match self {
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Word(w) => w.clone(),
            Token::Quoted(s) => format!("'{}'", s),
        }
    }
}

/// Tokenize a rule string
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '\'' | '"' => {
                let quote = c;
                chars.next();
                let mut literal = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    if ch == quote {
                        closed = true;
                        break;
                    }
                    literal.push(ch);
                }
                if !closed {
                    return Err(ParseError::UnterminatedString);
                }
                tokens.push(Token::Quoted(literal));
            }
            _ => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() || matches!(ch, '(' | ')' | '\'' | '"') {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
        }
    }

    Ok(tokens)
}
