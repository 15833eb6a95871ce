//! Lexical analysis
//!
//! Converts source text into tokens by longest match against a rule table.

mod rules;
mod scanner;
mod token;

pub use rules::{Constructor, LexRule, LexRules};
pub use scanner::Tokenizer;
pub use token::Token;

use crate::error::LexError;

/// Tokenizes `input` with the standard rule table
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new().tokenize(input)
}
