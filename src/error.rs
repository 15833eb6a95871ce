//! Error types for the tokenizer and parser

use thiserror::Error;

/// Failures raised while turning source text into tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No lexical rule matches at the scan position
    ///
    /// **Triggered by:** a character no rule accepts
    /// **Example:** `(+ 1 "two")` (string literals are not part of the notation)
    #[error("No lexical rule matches {found:?} at byte {position}")]
    NoMatch {
        /// Byte offset of the scan cursor
        position: usize,
        /// Character found at that offset
        found: char,
    },

    /// Digit run too large for a 64-bit integer
    #[error("Integer literal `{literal}` at byte {position} does not fit in 64 bits")]
    NumberOutOfRange {
        /// Byte offset where the literal starts
        position: usize,
        /// The digit run as written
        literal: String,
    },

    /// A custom rule's pattern failed to compile
    #[error("Invalid lexical pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The pattern as supplied
        pattern: String,
        /// Message from the regex compiler
        message: String,
    },
}

/// Failures raised while building expressions from tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token remains that no production can start with
    ///
    /// **Example:** `)` at the top level
    #[error("No production matches token {found} at index {index}")]
    NoMatchingProduction {
        /// Index of the offending token
        index: usize,
        /// Source spelling of the offending token
        found: String,
    },

    /// A collection was not closed by its own delimiter
    ///
    /// **Triggered by:** end of input inside a collection, a mismatched closer,
    /// or a token that cannot start a form
    /// **Example:** `(1 2`, `[1 2}`
    #[error("Unbalanced or invalid form inside `{open}` at index {index}: found {found}")]
    UnbalancedOrInvalidForm {
        /// Index where the collection stopped matching
        index: usize,
        /// Opening delimiter of the collection
        open: char,
        /// What was found instead of a form or the closer
        found: String,
    },

    /// An operator, `if` or `not` ran out of operands
    ///
    /// **Example:** `(if true 1)` (missing else-branch)
    #[error("Incomplete `{form}` form at index {index}: expected {expected} operands, found {found}")]
    IncompleteForm {
        /// Index where the missing operand should start
        index: usize,
        /// Head keyword or operator of the form
        form: String,
        /// Operands the form requires
        expected: usize,
        /// Operands matched before the failure
        found: usize,
    },

    /// Forms nested deeper than the configured limit
    #[error("Forms nested deeper than {limit} levels")]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
    },
}

/// Any failure of the source → tokens → expressions pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tokenization failed
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// True if the failure happened before any parsing started
    pub fn is_lex(&self) -> bool {
        matches!(self, Error::Lex(_))
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
