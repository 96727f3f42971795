use std::rc::Rc;

use crate::interpreter::lexer::Token;

/// A raw literal value as produced by the parser.
///
/// Literals are interpreted each time they are evaluated: quoted text is
/// unwrapped and Devanagari numerals are read then, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Raw text: either a quoted string with its `"` delimiters kept, or a
    /// run of Devanagari digits.
    Text(String),
    /// A native number passed through unchanged.
    Number(f64),
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name.
    Variable(Token),
    /// A literal value.
    Literal(LiteralValue),
    /// Function call expression (e.g. `जोड(१, २)`).
    Call {
        /// The name of the function being called.
        callee: Token,
        /// Arguments, in call order.
        args:   Vec<Self>,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token (`+`, `-`, `*`, `/` or `%`).
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node from anything convertible to a [`LiteralValue`].
    ///
    /// ## Example
    /// ```
    /// use lipi::ast::{Expr, LiteralValue};
    ///
    /// assert_eq!(Expr::literal("५"), Expr::Literal(LiteralValue::Text("५".to_string())));
    /// ```
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Builds a variable reference without source position.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Token::identifier(name))
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }
}

/// A user-defined function declaration.
///
/// Declarations are bound into the environment as they are, wrapped in an
/// [`Rc`]; there is no separate closure object.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   Token,
    /// The parameter names, in order.
    pub params: Vec<Token>,
    /// Statements executed when the function is called.
    pub body:   Vec<Stmt>,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `छाप(expression)`.
    Print(Expr),
    /// `मानौ name = initializer`, the initializer being optional.
    Var {
        /// The name of the variable.
        name:        Token,
        /// The initial value, if any.
        initializer: Option<Expr>,
    },
    /// `कार्य name(params) { body }`.
    Function(Rc<FunctionDecl>),
    /// `{ statements }`.
    Block(Vec<Self>),
    /// An expression evaluated for its side effects.
    Expression(Expr),
}
