//! Parser
//!
//! Builds expression trees from tokens with a backtracking recursive-descent
//! grammar:
//!
//! ```text
//! Program    -> Form*
//! Form       -> Atom | Collection
//! Atom       -> Number | Identifier | Boolean | Func
//! Func       -> 'if' Form Form Form | 'not' Form | BinaryOp Form Form
//! Collection -> '(' Form* ')' | '[' Form* ']' | '{' Form* '}'
//! ```

mod ast;
mod form_parser;

pub use ast::{Atom, BinaryOp, Collection, CollectionKind, Expression, Func};
pub use form_parser::{FormParser, Match, MatchResult, ParserConfig};

use crate::error::ParseError;
use crate::lexer::Token;

/// Parses every top-level form with default limits
pub fn parse_program(tokens: &[Token]) -> Result<Vec<Expression>, ParseError> {
    FormParser::new(tokens).parse_program()
}
