//! Evaluate infix math expressions with functions, constants and a
//! configurable unary minus.
//!
//! ```
//! let calc = calcyard::Calculator::new();
//! assert_eq!(calc.solve("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(calc.solve("5 - -3"), Ok(8.0));
//! ```
extern crate lexers;

pub use calculator::Calculator;
pub use errors::{CalcError, ConfigError, EvalErr, ParseError};
pub use functions::{round_to, to_degrees, to_radians, FuncKind};
pub use minus::disambiguate;
pub use parser::{RPNExpr, ShuntingParser};
pub use registry::{symbol_value, Assoc, OpKind, Operator, OperatorTable, SYMBOLS};
pub use rpneval::MathContext;
pub use tokenizer::{Token, Tokenizer};

mod calculator;
mod errors;
mod functions;
mod minus;
mod parser;
mod registry;
mod rpneval;
#[cfg(test)]
mod rpneval_test;
mod tokenizer;
