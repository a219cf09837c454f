use crate::errors::EvalErr;
use crate::parser::{RPNExpr, ShuntingParser};
use crate::registry::OperatorTable;
use crate::rpneval::MathContext;
use crate::tokenizer::Token;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10, "{} != {}", $lhs, $rhs)
    };
}

fn eval(expr: &str) -> Result<f64, EvalErr> {
    let ops = OperatorTable::new();
    let rpn = ShuntingParser::parse_str(expr, &ops).unwrap();
    MathContext::new(&ops, 7).eval(&rpn)
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval("3+4*2/#(1-5)^2^3").unwrap(), 3.0001220703125);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval("3.4e2 * sin(30) / nrt(2, 16) * 2").unwrap(), 85.0);
}

#[test]
fn test_eval3() {
    fuzzy_eq!(eval("(#(1-9^2) / (1 + 3^2))^0.5").unwrap(), 2.8284271247461903);
}

#[test]
fn test_eval4() {
    fuzzy_eq!(eval("sin(30)^2 + cos(60)^2").unwrap(), 0.5);
}

#[test]
fn test_eval5() {
    fuzzy_eq!(eval("2*pi - π").unwrap(), std::f64::consts::PI);
    fuzzy_eq!(eval("e^2").unwrap(), std::f64::consts::E.powi(2));
}

#[test]
fn test_eval6() {
    fuzzy_eq!(eval("(3+4)*3").unwrap(), 21.0);
    fuzzy_eq!(eval("8-3-2").unwrap(), 3.0);
    fuzzy_eq!(eval("8/4/2").unwrap(), 1.0);
}

#[test]
fn test_eval7() {
    fuzzy_eq!(eval("2^3").unwrap(), 8.0);
    fuzzy_eq!(eval("2^#3").unwrap(), 0.125);
    fuzzy_eq!(eval("#2^2").unwrap(), 4.0);
    fuzzy_eq!(eval("#(2^2)").unwrap(), -4.0);
}

#[test]
fn function_rounding() {
    assert_eq!(eval("asin(0.5)"), Ok(30.0));
    assert_eq!(eval("sqrt(2)"), Ok(1.4142136));
    let ops = OperatorTable::new();
    let rpn = ShuntingParser::parse_str("sqrt(2)", &ops).unwrap();
    assert_eq!(MathContext::new(&ops, 2).eval(&rpn), Ok(1.41));
}

#[test]
fn eval_errors() {
    assert_eq!(eval("1/(2-2)"), Err(EvalErr::DivisionByZero));
    assert_eq!(
        eval("+2"),
        Err(EvalErr::InsufficientValues { token: format!("+"), needed: 2, available: 1 })
    );
    assert_eq!(
        eval("nrt(8)"),
        Err(EvalErr::InsufficientValues { token: format!("nrt"), needed: 2, available: 1 })
    );
    assert_eq!(
        eval("#"),
        Err(EvalErr::InsufficientValues { token: format!("#"), needed: 1, available: 0 })
    );
    assert_eq!(eval("2 3"), Err(EvalErr::TooManyValues(2)));
    assert_eq!(eval("sin(1,2)"), Err(EvalErr::TooManyValues(2)));
    assert_eq!(eval(""), Err(EvalErr::EmptyExpression));
}

#[test]
fn hand_built_rpn() {
    let ops = OperatorTable::new();
    let cx = MathContext::new(&ops, 7);
    let rpn = RPNExpr(vec![Token::Symbol(format!("tau"))]);
    assert_eq!(cx.eval(&rpn), Err(EvalErr::UnknownSymbol(format!("tau"))));
    let rpn = RPNExpr(vec![Token::Number(1.0), Token::OParen]);
    assert_eq!(cx.eval(&rpn), Err(EvalErr::BadToken(format!("("))));
    let rpn = RPNExpr(vec![Token::Number(1.0), Token::Function(format!("log"))]);
    assert_eq!(cx.eval(&rpn), Err(EvalErr::BadToken(format!("log"))));
    let rpn = RPNExpr(vec![Token::Number(1.0), Token::Number(2.0), Token::Operator(format!("-"))]);
    assert_eq!(cx.eval(&rpn), Ok(-1.0));
}
