//! The lexical rule table
//!
//! A rule pairs a pattern with a token constructor. The scanner only ever sees
//! the table, so the same `Token` set can be recognised with a different table.

use lazy_static::lazy_static;
use regex::Regex;

use super::token::Token;
use crate::error::LexError;

/// Builds a token from a matched lexeme and the byte offset it starts at
pub type Constructor = fn(&str, usize) -> Result<Token, LexError>;

/// One (pattern → constructor) entry
#[derive(Debug, Clone)]
pub struct LexRule {
    /// Compiled pattern, anchored at the scan position
    pattern: Regex,
    /// Pattern as supplied by the caller
    source: String,
    build: Constructor,
}

impl LexRule {
    /// Compiles `pattern` anchored at the scan position
    pub fn new(pattern: &str, build: Constructor) -> Result<Self, LexError> {
        let anchored = format!("^(?:{})", pattern);
        let compiled = Regex::new(&anchored).map_err(|e| LexError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(LexRule {
            pattern: compiled,
            source: pattern.to_string(),
            build,
        })
    }

    /// The pattern as supplied, without the anchor
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Length in bytes of the match at the start of `rest`, if any
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.pattern.find(rest).map(|m| m.end())
    }

    /// Runs the constructor on a matched lexeme
    pub fn build(&self, lexeme: &str, position: usize) -> Result<Token, LexError> {
        (self.build)(lexeme, position)
    }
}

/// An ordered rule table; earlier rules win equal-length ties
#[derive(Debug, Clone)]
pub struct LexRules {
    rules: Vec<LexRule>,
}

impl LexRules {
    /// Creates a table from rules in priority order
    pub fn new(rules: Vec<LexRule>) -> Self {
        LexRules { rules }
    }

    /// Appends a rule with the lowest tie-break priority
    pub fn push(&mut self, rule: LexRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Rules in priority order
    pub fn iter(&self) -> std::slice::Iter<'_, LexRule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for LexRules {
    /// The standard table, compiled once and shared
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

fn number(lexeme: &str, position: usize) -> Result<Token, LexError> {
    lexeme
        .parse::<i64>()
        .map(Token::Number)
        .map_err(|_| LexError::NumberOutOfRange {
            position,
            literal: lexeme.to_string(),
        })
}

fn identifier(lexeme: &str, _position: usize) -> Result<Token, LexError> {
    Ok(Token::Identifier(lexeme.to_string()))
}

fn boolean(lexeme: &str, _position: usize) -> Result<Token, LexError> {
    Ok(Token::Boolean(lexeme == "true"))
}

lazy_static! {
    /// Boolean and keyword rules come before the identifier rule, so `true`,
    /// `if`, `and` etc. beat an identifier of the same length.
    static ref DEFAULT_RULES: LexRules = {
        let table: [(&str, Constructor); 23] = [
            (r"[ \t\r\n,]+", |_, _| Ok(Token::Whitespace)),
            (r"\z", |_, _| Ok(Token::EndOfInput)),
            ("true|false", boolean),
            ("and", |_, _| Ok(Token::And)),
            ("or", |_, _| Ok(Token::Or)),
            ("if", |_, _| Ok(Token::If)),
            ("def", |_, _| Ok(Token::Def)),
            ("not", |_, _| Ok(Token::Not)),
            ("[0-9]+", number),
            ("[A-Za-z][A-Za-z0-9_]*", identifier),
            (r"\(", |_, _| Ok(Token::LeftParen)),
            (r"\)", |_, _| Ok(Token::RightParen)),
            (r"\[", |_, _| Ok(Token::LeftBracket)),
            (r"\]", |_, _| Ok(Token::RightBracket)),
            (r"\{", |_, _| Ok(Token::LeftBrace)),
            (r"\}", |_, _| Ok(Token::RightBrace)),
            (">", |_, _| Ok(Token::GreaterThan)),
            ("<", |_, _| Ok(Token::LessThan)),
            ("=", |_, _| Ok(Token::EqualTo)),
            (r"\+", |_, _| Ok(Token::Add)),
            ("-", |_, _| Ok(Token::Subtract)),
            (r"\*", |_, _| Ok(Token::Multiply)),
            ("/", |_, _| Ok(Token::Divide)),
        ];

        LexRules::new(
            table
                .into_iter()
                .map(|(pattern, build)| {
                    LexRule::new(pattern, build).expect("built-in lexical patterns are valid")
                })
                .collect(),
        )
    };
}
