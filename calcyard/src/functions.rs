use crate::errors::EvalErr;
use std::f64::consts;

/// Built-in functions. Direct trig functions take degrees and inverse
/// ones answer in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FuncKind {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Nrt, // nrt(n, x): n-th root of x
}

impl FuncKind {
    pub const ALL: [FuncKind; 8] = [
        FuncKind::Sin,
        FuncKind::Cos,
        FuncKind::Tan,
        FuncKind::Asin,
        FuncKind::Acos,
        FuncKind::Atan,
        FuncKind::Sqrt,
        FuncKind::Nrt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FuncKind::Sin => "sin",
            FuncKind::Cos => "cos",
            FuncKind::Tan => "tan",
            FuncKind::Asin => "asin",
            FuncKind::Acos => "acos",
            FuncKind::Atan => "atan",
            FuncKind::Sqrt => "sqrt",
            FuncKind::Nrt => "nrt",
        }
    }

    pub fn from_name(name: &str) -> Option<FuncKind> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    pub fn arity(self) -> usize {
        match self {
            FuncKind::Nrt => 2,
            _ => 1,
        }
    }

    /// Apply the function and round the result to `decimals` digits.
    pub fn apply(self, args: &[f64], decimals: u32) -> Result<f64, EvalErr> {
        let raw = match (self, args) {
            (FuncKind::Sin, [a]) => to_radians(*a).sin(),
            (FuncKind::Cos, [a]) => to_radians(*a).cos(),
            (FuncKind::Tan, [a]) => to_radians(*a).tan(),
            (FuncKind::Asin, [a]) => to_degrees(a.asin()),
            (FuncKind::Acos, [a]) => to_degrees(a.acos()),
            (FuncKind::Atan, [a]) => to_degrees(a.atan()),
            (FuncKind::Sqrt, [a]) => a.sqrt(),
            (FuncKind::Nrt, [n, x]) => 10f64.powf(x.log10() / n),
            _ => {
                return Err(EvalErr::InsufficientValues {
                    token: self.name().to_string(),
                    needed: self.arity(),
                    available: args.len(),
                })
            }
        };
        Ok(round_to(raw, decimals))
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * (consts::PI / 180.0)
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / consts::PI)
}

/// Round half away from zero keeping `decimals` fractional digits.
/// Values too large to scale are returned untouched.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = x * scale;
    if !scaled.is_finite() || !scale.is_finite() {
        return x;
    }
    scaled.round() / scale
}
