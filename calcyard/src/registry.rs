use std::collections::HashMap;
use std::f64::consts;

use log::info;

use crate::errors::{ConfigError, EvalErr};
use crate::functions::FuncKind;

pub static SYMBOLS: [(&str, f64); 3] = [("pi", consts::PI), ("e", consts::E), ("π", consts::PI)];

pub fn symbol_value(name: &str) -> Option<f64> {
    SYMBOLS.iter().find(|(sym, _)| *sym == name).map(|(_, val)| *val)
}

// grouping and argument separator, never operator keys
pub static PUNCTUATION: [&str; 3] = ["(", ")", ","];

// chars that can show up inside a numeric literal besides digits
static NUMERIC: [char; 3] = ['.', 'e', 'E'];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
}

impl OpKind {
    pub fn arity(self) -> usize {
        match self {
            OpKind::Neg => 1,
            _ => 2,
        }
    }

    pub fn apply(self, args: &[f64]) -> Result<f64, EvalErr> {
        match (self, args) {
            (OpKind::Add, [l, r]) => Ok(l + r),
            (OpKind::Sub, [l, r]) => Ok(l - r),
            (OpKind::Mul, [l, r]) => Ok(l * r),
            (OpKind::Div, [_, r]) if *r == 0.0 => Err(EvalErr::DivisionByZero),
            (OpKind::Div, [l, r]) => Ok(l / r),
            (OpKind::Pow, [l, r]) => Ok(l.powf(*r)),
            (OpKind::Neg, [o]) => Ok(-o),
            _ => Err(EvalErr::InsufficientValues {
                token: format!("{:?}", self),
                needed: self.arity(),
                available: args.len(),
            }),
        }
    }
}

/// How an operator token binds. Arity follows from `kind`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Operator {
    pub kind: OpKind,
    pub precedence: u32,
    pub assoc: Assoc,
}

impl Operator {
    pub const fn new(kind: OpKind, precedence: u32, assoc: Assoc) -> Operator {
        Operator { kind, precedence, assoc }
    }

    pub fn arity(&self) -> usize {
        self.kind.arity()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Minus {
    Unary,
    Binary,
}

/// Operator registry keyed by token. The two minus roles are bound to
/// configurable tokens that always map to distinct entries.
#[derive(Clone, Debug)]
pub struct OperatorTable {
    ops: HashMap<String, Operator>,
    unary_minus: String,
    binary_minus: String,
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorTable {
    pub const DEFAULT_UNARY_MINUS: &'static str = "#";
    pub const DEFAULT_BINARY_MINUS: &'static str = "-";

    pub fn new() -> OperatorTable {
        let mut ops = HashMap::new();
        ops.insert("+".to_string(), Operator::new(OpKind::Add, 1, Assoc::Left));
        ops.insert(
            Self::DEFAULT_BINARY_MINUS.to_string(),
            Operator::new(OpKind::Sub, 1, Assoc::Left),
        );
        ops.insert("*".to_string(), Operator::new(OpKind::Mul, 2, Assoc::Left));
        ops.insert("/".to_string(), Operator::new(OpKind::Div, 2, Assoc::Left));
        ops.insert("^".to_string(), Operator::new(OpKind::Pow, 3, Assoc::Right));
        ops.insert(
            Self::DEFAULT_UNARY_MINUS.to_string(),
            Operator::new(OpKind::Neg, 10, Assoc::Right),
        );
        OperatorTable {
            ops,
            unary_minus: Self::DEFAULT_UNARY_MINUS.to_string(),
            binary_minus: Self::DEFAULT_BINARY_MINUS.to_string(),
        }
    }

    pub fn get(&self, token: &str) -> Option<&Operator> {
        self.ops.get(token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    pub fn unary_minus(&self) -> &str {
        &self.unary_minus
    }

    pub fn binary_minus(&self) -> &str {
        &self.binary_minus
    }

    pub fn set_unary_minus(&mut self, token: &str) -> Result<(), ConfigError> {
        self.rebind(Minus::Unary, token)
    }

    pub fn set_binary_minus(&mut self, token: &str) -> Result<(), ConfigError> {
        self.rebind(Minus::Binary, token)
    }

    fn rebind(&mut self, role: Minus, token: &str) -> Result<(), ConfigError> {
        let (current, other) = match role {
            Minus::Unary => (&self.unary_minus, &self.binary_minus),
            Minus::Binary => (&self.binary_minus, &self.unary_minus),
        };
        if token == current.as_str() {
            return Ok(());
        }
        Self::validate(token)?;
        if self.ops.contains_key(token)
            || FuncKind::from_name(token).is_some()
            || symbol_value(token).is_some()
        {
            return Err(ConfigError::Collision(token.to_string()));
        }
        // the binary token is rewritten wherever it appears in the raw text
        if role == Minus::Binary {
            let mut words = self
                .ops
                .keys()
                .map(String::as_str)
                .filter(|k| *k != current.as_str())
                .chain(FuncKind::ALL.iter().map(|f| f.name()))
                .chain(SYMBOLS.iter().map(|(name, _)| *name));
            if words.any(|w| w.contains(token)) {
                return Err(ConfigError::Collision(token.to_string()));
            }
        }
        if token.contains(other.as_str()) || other.contains(token) {
            let (unary, binary) = match role {
                Minus::Unary => (token.to_string(), other.clone()),
                Minus::Binary => (other.clone(), token.to_string()),
            };
            return Err(ConfigError::Overlap { unary, binary });
        }

        let old = current.clone();
        if let Some(op) = self.ops.remove(&old) {
            self.ops.insert(token.to_string(), op);
        }
        match role {
            Minus::Unary => self.unary_minus = token.to_string(),
            Minus::Binary => self.binary_minus = token.to_string(),
        }
        info!("{:?} minus rebound from {:?} to {:?}", role, old, token);
        Ok(())
    }

    fn validate(token: &str) -> Result<(), ConfigError> {
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        if token.chars().any(char::is_whitespace) {
            return Err(ConfigError::Whitespace(token.to_string()));
        }
        if token
            .chars()
            .any(|c| {
                c.is_ascii_digit()
                    || NUMERIC.contains(&c)
                    || PUNCTUATION.iter().any(|p| p.starts_with(c))
            })
        {
            return Err(ConfigError::Reserved(token.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let table = OperatorTable::new();
        assert_eq!(table.unary_minus(), "#");
        assert_eq!(table.binary_minus(), "-");
        assert_eq!(table.get("-").map(|o| o.kind), Some(OpKind::Sub));
        assert_eq!(table.get("#").map(|o| o.arity()), Some(1));
        assert_eq!(table.get("^").map(|o| o.assoc), Some(Assoc::Right));
        assert_eq!(table.tokens().count(), 6);
        assert_eq!(symbol_value("π"), Some(consts::PI));
        assert_eq!(symbol_value("tau"), None);
    }

    #[test]
    fn apply_ops() {
        assert_eq!(OpKind::Sub.apply(&[5.0, 3.0]), Ok(2.0));
        assert_eq!(OpKind::Pow.apply(&[2.0, 10.0]), Ok(1024.0));
        assert_eq!(OpKind::Neg.apply(&[4.0]), Ok(-4.0));
        assert_eq!(OpKind::Div.apply(&[1.0, 0.0]), Err(EvalErr::DivisionByZero));
        assert_eq!(OpKind::Div.apply(&[1.0, -0.0]), Err(EvalErr::DivisionByZero));
        assert!(OpKind::Add.apply(&[1.0]).is_err());
    }

    #[test]
    fn rebind_minus() {
        let mut table = OperatorTable::new();
        table.set_unary_minus("~").unwrap();
        assert_eq!(table.unary_minus(), "~");
        assert_eq!(table.get("#"), None);
        assert_eq!(table.get("~").map(|o| o.kind), Some(OpKind::Neg));

        table.set_binary_minus("−").unwrap();
        assert_eq!(table.get("-"), None);
        assert_eq!(table.get("−").map(|o| o.kind), Some(OpKind::Sub));
        assert_eq!(table.tokens().count(), 6);

        // same token again is a no-op
        table.set_unary_minus("~").unwrap();
        assert_eq!(table.get("~").map(|o| o.kind), Some(OpKind::Neg));
    }

    #[test]
    fn rebind_rejected() {
        let mut table = OperatorTable::new();
        assert_eq!(table.set_unary_minus(""), Err(ConfigError::EmptyToken));
        assert_eq!(table.set_unary_minus("n eg"), Err(ConfigError::Whitespace(format!("n eg"))));
        assert_eq!(table.set_unary_minus("1"), Err(ConfigError::Reserved(format!("1"))));
        assert_eq!(table.set_unary_minus("("), Err(ConfigError::Reserved(format!("("))));
        assert_eq!(table.set_unary_minus("-"), Err(ConfigError::Collision(format!("-"))));
        assert_eq!(table.set_unary_minus("*"), Err(ConfigError::Collision(format!("*"))));
        assert_eq!(table.set_unary_minus("sin"), Err(ConfigError::Collision(format!("sin"))));
        assert_eq!(table.set_binary_minus("pi"), Err(ConfigError::Collision(format!("pi"))));
        assert_eq!(
            table.set_unary_minus("--"),
            Err(ConfigError::Overlap { unary: format!("--"), binary: format!("-") })
        );
        // binary minus can't hide inside other registered words
        assert_eq!(table.set_binary_minus("t"), Err(ConfigError::Collision(format!("t"))));
        assert_eq!(table.set_binary_minus("qr"), Err(ConfigError::Collision(format!("qr"))));
        assert_eq!(table.set_binary_minus("i"), Err(ConfigError::Collision(format!("i"))));
        // nor can either token look like part of a number
        assert_eq!(table.set_binary_minus("E"), Err(ConfigError::Reserved(format!("E"))));
        assert_eq!(table.set_unary_minus("."), Err(ConfigError::Reserved(format!("."))));
        assert_eq!(table.set_unary_minus("neg"), Err(ConfigError::Reserved(format!("neg"))));
        // nothing changed
        assert_eq!(table.unary_minus(), "#");
        assert_eq!(table.binary_minus(), "-");
        assert!(table.get("#").is_some());
    }
}
