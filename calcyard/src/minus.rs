use log::debug;

// when would a minus be unary? look at the char right before it
fn makes_unary(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => !c.is_ascii_digit() && c != ')',
    }
}

/// Tag every `binary` token in `expr` as subtraction (kept) or negation
/// (replaced by `unary`).
///
/// The decision only looks at the closest non-blank character before the
/// token, so `5 - 3` subtracts and `sin-5` negates. Whitespace is kept in
/// the output where it still separates tokens (`2 3` isn't `23`).
pub fn disambiguate(expr: &str, binary: &str, unary: &str) -> String {
    if binary.is_empty() {
        return expr.to_string();
    }
    let mut out = String::with_capacity(expr.len());
    let mut last = 0;
    for (offset, _) in expr.match_indices(binary) {
        out.push_str(&expr[last..offset]);
        let prev = expr[..offset].chars().rev().find(|c| !c.is_whitespace());
        if makes_unary(prev) {
            out.push_str(unary);
        } else {
            out.push_str(binary);
        }
        last = offset + binary.len();
    }
    out.push_str(&expr[last..]);
    debug!("disambiguated {:?} -> {:?}", expr, out);
    out
}
