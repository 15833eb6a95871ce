use serde::{Deserialize, Serialize};

use crate::lexer::Token;

/// A parsed form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// Leaf value or operator-headed form
    Atom(Atom),
    /// Bracketed group of forms
    Collection(Collection),
}

/// Non-collection forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atom {
    /// Identifier reference
    Identifier(String),
    /// Integer literal
    Number(i64),
    /// Boolean literal
    Boolean(bool),
    /// Operator, `if` or `not` form
    Func(Func),
}

/// Forms headed by an operator or keyword; arity is fixed by the shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Func {
    /// Binary operator: `op left right`
    Operator {
        /// Which operator
        op: BinaryOp,
        /// First operand
        left: Box<Expression>,
        /// Second operand
        right: Box<Expression>,
    },

    /// Conditional: `if guard then else`
    If {
        /// Condition expression
        guard: Box<Expression>,
        /// Taken when the guard holds
        then_branch: Box<Expression>,
        /// Taken otherwise
        else_branch: Box<Expression>,
    },

    /// Logical negation: `not operand`
    Not(Box<Expression>),
}

/// Binary operators (including `def`, which also takes exactly two forms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Plus,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Logical AND
    And,
    /// Logical OR
    Or,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Structural equality (=)
    EqualTo,
    /// Definition
    Def,
}

impl BinaryOp {
    /// The operator a token stands for, if any
    pub fn from_token(token: &Token) -> Option<BinaryOp> {
        match token {
            Token::Add => Some(BinaryOp::Plus),
            Token::Subtract => Some(BinaryOp::Sub),
            Token::Multiply => Some(BinaryOp::Multiply),
            Token::Divide => Some(BinaryOp::Divide),
            Token::And => Some(BinaryOp::And),
            Token::Or => Some(BinaryOp::Or),
            Token::GreaterThan => Some(BinaryOp::GreaterThan),
            Token::LessThan => Some(BinaryOp::LessThan),
            Token::EqualTo => Some(BinaryOp::EqualTo),
            Token::Def => Some(BinaryOp::Def),
            _ => None,
        }
    }

    /// Source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessThan => "<",
            BinaryOp::EqualTo => "=",
            BinaryOp::Def => "def",
        }
    }
}

/// Bracketed groups; children are kept in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    /// `( ... )`
    List(Vec<Expression>),
    /// `[ ... ]`
    Vector(Vec<Expression>),
    /// `{ ... }`, a flat alternating key/value sequence (pairing is not checked)
    Map(Vec<Expression>),
}

impl Collection {
    /// Children in source order
    pub fn elements(&self) -> &[Expression] {
        match self {
            Collection::List(items) | Collection::Vector(items) | Collection::Map(items) => items,
        }
    }

    /// Which delimiter pair produced this collection
    pub fn kind(&self) -> CollectionKind {
        match self {
            Collection::List(_) => CollectionKind::List,
            Collection::Vector(_) => CollectionKind::Vector,
            Collection::Map(_) => CollectionKind::Map,
        }
    }
}

/// Delimiter pair and constructor for one collection shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Parentheses
    List,
    /// Square brackets
    Vector,
    /// Braces
    Map,
}

impl CollectionKind {
    /// Every kind, in the order the parser tries them
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::List,
        CollectionKind::Vector,
        CollectionKind::Map,
    ];

    /// Opening delimiter token
    pub fn open(self) -> Token {
        match self {
            CollectionKind::List => Token::LeftParen,
            CollectionKind::Vector => Token::LeftBracket,
            CollectionKind::Map => Token::LeftBrace,
        }
    }

    /// Closing delimiter token
    pub fn close(self) -> Token {
        match self {
            CollectionKind::List => Token::RightParen,
            CollectionKind::Vector => Token::RightBracket,
            CollectionKind::Map => Token::RightBrace,
        }
    }

    /// Opening delimiter character, for messages
    pub fn open_char(self) -> char {
        match self {
            CollectionKind::List => '(',
            CollectionKind::Vector => '[',
            CollectionKind::Map => '{',
        }
    }

    /// Wraps parsed children in the matching node
    pub fn build(self, elements: Vec<Expression>) -> Expression {
        Expression::Collection(match self {
            CollectionKind::List => Collection::List(elements),
            CollectionKind::Vector => Collection::Vector(elements),
            CollectionKind::Map => Collection::Map(elements),
        })
    }
}

// Convenience constructors, mostly for building expected trees in tests.
impl Expression {
    /// Integer literal
    pub fn number(value: i64) -> Self {
        Expression::Atom(Atom::Number(value))
    }

    /// Identifier reference
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Atom(Atom::Identifier(name.into()))
    }

    /// Boolean literal
    pub fn boolean(value: bool) -> Self {
        Expression::Atom(Atom::Boolean(value))
    }

    /// Binary operator form
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Atom(Atom::Func(Func::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    /// `if` form
    pub fn if_then_else(guard: Expression, then_branch: Expression, else_branch: Expression) -> Self {
        Expression::Atom(Atom::Func(Func::If {
            guard: Box::new(guard),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }))
    }

    /// `not` form
    pub fn not(operand: Expression) -> Self {
        Expression::Atom(Atom::Func(Func::Not(Box::new(operand))))
    }

    /// `( ... )`
    pub fn list(elements: Vec<Expression>) -> Self {
        CollectionKind::List.build(elements)
    }

    /// `[ ... ]`
    pub fn vector(elements: Vec<Expression>) -> Self {
        CollectionKind::Vector.build(elements)
    }

    /// `{ ... }`
    pub fn map(elements: Vec<Expression>) -> Self {
        CollectionKind::Map.build(elements)
    }

    /// The collection node, if this is one
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Expression::Collection(collection) => Some(collection),
            Expression::Atom(_) => None,
        }
    }
}
