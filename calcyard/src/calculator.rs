use log::debug;

use crate::errors::{CalcError, ConfigError, EvalErr, ParseError};
use crate::minus;
use crate::parser::{RPNExpr, ShuntingParser};
use crate::registry::OperatorTable;
use crate::rpneval::MathContext;

/// Evaluates infix expressions such as `2*sin(30)-nrt(3, 27)`.
///
/// Each `solve` call runs the whole pipeline: minus disambiguation,
/// tokenizing with shunting-yard conversion to RPN, then RPN evaluation.
/// Rebinding the minus tokens takes `&mut self`, so it can't race an
/// evaluation; share a `Calculator` across threads behind a lock.
#[derive(Clone, Debug)]
pub struct Calculator {
    ops: OperatorTable,
    decimals: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub const DEFAULT_DECIMALS: u32 = 7;

    pub fn new() -> Calculator {
        Self::with_decimals(Self::DEFAULT_DECIMALS)
    }

    /// Round function results to `decimals` fractional digits.
    pub fn with_decimals(decimals: u32) -> Calculator {
        Calculator { ops: OperatorTable::new(), decimals }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.ops
    }

    pub fn unary_minus(&self) -> &str {
        self.ops.unary_minus()
    }

    pub fn binary_minus(&self) -> &str {
        self.ops.binary_minus()
    }

    pub fn set_unary_minus(&mut self, token: &str) -> Result<(), ConfigError> {
        self.ops.set_unary_minus(token)
    }

    pub fn set_binary_minus(&mut self, token: &str) -> Result<(), ConfigError> {
        self.ops.set_binary_minus(token)
    }

    pub fn disambiguate(&self, expr: &str) -> String {
        minus::disambiguate(expr, self.ops.binary_minus(), self.ops.unary_minus())
    }

    pub fn to_rpn(&self, expr: &str) -> Result<RPNExpr, ParseError> {
        ShuntingParser::parse_str(&self.disambiguate(expr), &self.ops)
    }

    pub fn eval_rpn(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        MathContext::new(&self.ops, self.decimals).eval(rpn)
    }

    pub fn solve(&self, expr: &str) -> Result<f64, CalcError> {
        debug!("solving {:?}", expr);
        let rpn = self.to_rpn(expr)?;
        Ok(self.eval_rpn(&rpn)?)
    }
}
