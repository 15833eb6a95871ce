//! # ednlisp - Reader for a small EDN-flavoured Lisp
//!
//! Turns source text into expression trees ready for a later evaluator:
//!
//! ```text
//! Source Code → Tokenizer → Tokens → FormParser → Expressions
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ednlisp::{parse_str, BinaryOp, Expression};
//!
//! # fn main() -> ednlisp::Result<()> {
//! let forms = parse_str("(+ 1 2)")?;
//!
//! assert_eq!(
//!     forms,
//!     vec![Expression::list(vec![Expression::binary(
//!         BinaryOp::Plus,
//!         Expression::number(1),
//!         Expression::number(2),
//!     )])]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The two stages can also be driven separately:
//!
//! ```rust
//! use ednlisp::{FormParser, Tokenizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = Tokenizer::new().tokenize("[1 2 3] {true 4}")?;
//! let forms = FormParser::new(&tokens).parse_program()?;
//! assert_eq!(forms.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Notation
//!
//! - **Atoms**: unsigned integers `42`, identifiers `x1`, booleans `true` / `false`
//! - **Collections**: lists `(...)`, vectors `[...]`, maps `{...}`
//! - **Forms**: `if guard then else`, `not x`, and the binary forms
//!   `+ - * / and or > < = def`, each taking exactly two operands
//! - Whitespace and commas separate forms
//!
//! ## Errors
//!
//! Both stages stop at the first problem. [`LexError`] reports the byte offset
//! no rule matched; [`ParseError`] reports the index of the offending token.
//! Neither stage produces partial output.

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{Error, LexError, ParseError, Result};
pub use lexer::{tokenize, LexRule, LexRules, Token, Tokenizer};
pub use parser::{
    parse_program, Atom, BinaryOp, Collection, CollectionKind, Expression, FormParser, Func,
    ParserConfig,
};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenizes and parses `source` with the default rules and limits
pub fn parse_str(source: &str) -> Result<Vec<Expression>> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}
