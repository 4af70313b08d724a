// src/render.rs
// Text rendering, "(a+bi+cj+dk+em+fn+gp+hq)" for Cayley and the same shape
// with s, t, u, v for Klein. One-way; there is no parser.
//
// Coefficients use the %g convention: shortest round-trip digits, switching to
// exponent form when the decimal exponent is < -4 or >= 6, with a sign and at
// least two exponent digits ("1e+06", "2.5e-07"). Infinities render as
// "+Inf"/"-Inf" and NaN as "NaN".

use crate::doubling::{Form, Octonion};
use itertools::Itertools;
use std::fmt;

impl<F: Form> fmt::Display for Octonion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coords();
        let tail = c[1..]
            .iter()
            .zip(F::SYMBOLS.iter())
            .map(|(&v, sym)| format!("{}{}", signed(v), sym))
            .join("");
        write!(f, "({}{})", format_g(c[0]), tail)
    }
}

// Every coefficient after the first carries an explicit sign
fn signed(v: f64) -> String {
    if v.is_sign_negative() {
        format_g(v)
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else {
        format!("+{}", format_g(v))
    }
}

pub(crate) fn format_g(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. "1.25e-7"
    let sci = format!("{:e}", v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exp < -4 || exp >= 6 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        format!("{}", v)
    }
}
