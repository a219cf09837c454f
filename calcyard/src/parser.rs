use std::fmt;
use std::ops::Deref;

use log::{debug, trace};

use crate::errors::ParseError;
use crate::registry::{Assoc, Operator, OperatorTable};
use crate::tokenizer::{Token, Tokenizer};

/// Tokens in postfix (reverse polish) order.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

// operator descriptor for the top of the stack, if it holds an operator
fn top_operator<'a>(stack: &[Token], ops: &'a OperatorTable) -> Option<&'a Operator> {
    match stack.last() {
        Some(Token::Operator(op)) => ops.get(op),
        _ => None,
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    /// Parse already disambiguated input.
    pub fn parse_str(expr: &str, ops: &OperatorTable) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut Tokenizer::new(expr.chars(), ops), ops)
    }

    pub fn parse(
        lex: &mut impl Iterator<Item = Token>,
        ops: &OperatorTable,
    ) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in lex {
            trace!("token {:?}, stack {:?}", token, stack);
            match token {
                Token::Number(_) | Token::Symbol(_) => out.push(token),
                Token::Function(_) | Token::OParen => stack.push(token),
                Token::Comma => {
                    while let Some(top) = stack.pop() {
                        if top == Token::OParen {
                            stack.push(top);
                            break;
                        }
                        out.push(top);
                    }
                    if stack.is_empty() {
                        return Err(ParseError::MisplacedSeparator);
                    }
                }
                Token::Operator(op) => {
                    let current = *ops
                        .get(&op)
                        .ok_or_else(|| ParseError::UnknownOperator(op.clone()))?;
                    while let Some(top) = top_operator(&stack, ops) {
                        let pops = match current.assoc {
                            Assoc::Left => current.precedence <= top.precedence,
                            Assoc::Right => current.precedence < top.precedence,
                        };
                        if !pops {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(Token::Operator(op));
                }
                Token::CParen => {
                    loop {
                        match stack.pop() {
                            Some(Token::OParen) => break,
                            Some(top) => out.push(top),
                            None => return Err(ParseError::MissingOParen),
                        }
                    }
                    // end of grouping: check if this was a function call
                    if let Some(Token::Function(_)) = stack.last() {
                        out.extend(stack.pop());
                    }
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen | Token::CParen => return Err(ParseError::MissingCParen),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!("rpn: {}", rpn);
        Ok(rpn)
    }
}
