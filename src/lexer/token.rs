use serde::{Deserialize, Serialize};

/// All possible tokens of the notation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    // Atoms
    /// Unsigned decimal digit run
    Number(i64),
    /// `[A-Za-z][A-Za-z0-9_]*`
    Identifier(String),
    /// `true` or `false`
    Boolean(bool),

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,

    // Operators and keywords
    /// `and`
    And,
    /// `or`
    Or,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `=` (structural equality)
    EqualTo,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `if`
    If,
    /// `def`
    Def,
    /// `not`
    Not,

    // Sentinels, never present in tokenizer output
    /// End of input marker
    EndOfInput,
    /// Whitespace or comma run
    Whitespace,
}

impl Token {
    /// Check if token is a literal value
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Identifier(_) | Token::Boolean(_)
        )
    }

    /// Check if token opens or closes a collection
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            Token::LeftParen
                | Token::RightParen
                | Token::LeftBracket
                | Token::RightBracket
                | Token::LeftBrace
                | Token::RightBrace
        )
    }

    /// Check if token is an operator or special-form keyword
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::And
                | Token::Or
                | Token::GreaterThan
                | Token::LessThan
                | Token::EqualTo
                | Token::Add
                | Token::Subtract
                | Token::Multiply
                | Token::Divide
                | Token::If
                | Token::Def
                | Token::Not
        )
    }

    /// Canonical source spelling
    pub fn lexeme(&self) -> String {
        let fixed = match self {
            Token::Number(n) => return n.to_string(),
            Token::Identifier(name) => return name.clone(),
            Token::Boolean(b) => return b.to_string(),
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::And => "and",
            Token::Or => "or",
            Token::GreaterThan => ">",
            Token::LessThan => "<",
            Token::EqualTo => "=",
            Token::Add => "+",
            Token::Subtract => "-",
            Token::Multiply => "*",
            Token::Divide => "/",
            Token::If => "if",
            Token::Def => "def",
            Token::Not => "not",
            Token::EndOfInput => "",
            Token::Whitespace => " ",
        };
        fixed.to_string()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "identifier `{}`", name),
            Token::Boolean(b) => write!(f, "`{}`", b),
            Token::EndOfInput => write!(f, "end of input"),
            Token::Whitespace => write!(f, "whitespace"),
            other => write!(f, "`{}`", other.lexeme()),
        }
    }
}
