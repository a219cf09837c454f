use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("misplaced separator or mismatched parentheses")]
    MisplacedSeparator,
    #[error("mismatched parentheses: missing '('")]
    MissingOParen,
    #[error("mismatched parentheses: missing ')'")]
    MissingCParen,
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}

impl ParseError {
    pub fn is_paren_mismatch(&self) -> bool {
        matches!(self, ParseError::MissingOParen | ParseError::MissingCParen)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalErr {
    #[error("undefined operation: division by zero")]
    DivisionByZero,
    #[error("insufficient values for {token:?}: needs {needed}, found {available}")]
    InsufficientValues {
        token: String,
        needed: usize,
        available: usize,
    },
    #[error("too many values in the expression ({0} left)")]
    TooManyValues(usize),
    #[error("empty expression")]
    EmptyExpression,
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),
    #[error("bad token {0:?}")]
    BadToken(String),
}

/// Rejected rebinding of a minus token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("minus token can't be empty")]
    EmptyToken,
    #[error("minus token {0:?} contains whitespace")]
    Whitespace(String),
    #[error("minus token {0:?} contains a digit, a number char, a parenthesis or a separator")]
    Reserved(String),
    #[error("minus token {0:?} is already registered")]
    Collision(String),
    #[error("unary minus {unary:?} and binary minus {binary:?} overlap")]
    Overlap { unary: String, binary: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}
