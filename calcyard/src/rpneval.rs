use log::{debug, trace};

use crate::errors::EvalErr;
use crate::functions::FuncKind;
use crate::parser::RPNExpr;
use crate::registry::{symbol_value, OperatorTable};
use crate::tokenizer::Token;

/// Everything an RPN evaluation needs beyond the expression itself.
pub struct MathContext<'a> {
    ops: &'a OperatorTable,
    decimals: u32,
}

// pop `needed` operands keeping their left-to-right order
fn take_args(operands: &mut Vec<f64>, token: &str, needed: usize) -> Result<Vec<f64>, EvalErr> {
    if needed > operands.len() {
        return Err(EvalErr::InsufficientValues {
            token: token.to_string(),
            needed,
            available: operands.len(),
        });
    }
    let cut = operands.len() - needed;
    Ok(operands.split_off(cut))
}

impl<'a> MathContext<'a> {
    pub fn new(ops: &'a OperatorTable, decimals: u32) -> MathContext<'a> {
        MathContext { ops, decimals }
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in rpn.iter() {
            match token {
                Token::Number(num) => operands.push(*num),
                Token::Symbol(name) => match symbol_value(name) {
                    Some(value) => operands.push(value),
                    None => return Err(EvalErr::UnknownSymbol(name.clone())),
                },
                Token::Operator(op) => {
                    let desc = self.ops.get(op).ok_or_else(|| EvalErr::BadToken(op.clone()))?;
                    let args = take_args(&mut operands, op, desc.arity())?;
                    operands.push(desc.kind.apply(&args)?);
                }
                Token::Function(fname) => {
                    let func =
                        FuncKind::from_name(fname).ok_or_else(|| EvalErr::BadToken(fname.clone()))?;
                    let args = take_args(&mut operands, fname, func.arity())?;
                    operands.push(func.apply(&args, self.decimals)?);
                }
                other => return Err(EvalErr::BadToken(other.to_string())),
            }
            trace!("{} -> {:?}", token, operands);
        }
        match operands.len() {
            0 => Err(EvalErr::EmptyExpression),
            1 => {
                let result = operands.pop().ok_or(EvalErr::EmptyExpression)?;
                debug!("{} = {}", rpn, result);
                Ok(result)
            }
            n => Err(EvalErr::TooManyValues(n)),
        }
    }
}
