// src/klein.rs
// Klein octonions (split-octonions). Same product as Cayley with the two sign
// flips; the quadrance is indefinite, so null elements exist and the algebra
// is not a division algebra. Basis 1, i, j, k, s, t, u, v.

use crate::doubling::{Form, Octonion};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Split;

impl Form for Split {
    const SIGN: f64 = -1.0;
    const SYMBOLS: [&'static str; 7] = ["i", "j", "k", "s", "t", "u", "v"];
}

pub type Klein = Octonion<Split>;
