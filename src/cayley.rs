// src/cayley.rs
// Cayley octonions: the classical, positive-definite octonion division algebra.
// Basis 1, i, j, k, m, n, p, q.

use crate::doubling::{Form, Octonion};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Definite;

impl Form for Definite {
    const SIGN: f64 = 1.0;
    const SYMBOLS: [&'static str; 7] = ["i", "j", "k", "m", "n", "p", "q"];
}

pub type Cayley = Octonion<Definite>;

// ============================================================================
// Hyperspherical coordinates
// x0 = r cos(t1)
// xk = r sin(t1) ... sin(tk) cos(tk+1)   for k = 1..6
// x7 = r sin(t1) ... sin(t6) sin(t7)
// ============================================================================

impl Octonion<Definite> {
    /// Builds a value from a radius and 7 angles.
    pub fn from_polar(r: f64, theta: [f64; 7]) -> Self {
        let mut c = [0.0; 8];
        let mut sines = r;
        for k in 0..7 {
            c[k] = sines * theta[k].cos();
            sines *= theta[k].sin();
        }
        c[7] = sines;
        Self::from_coords(c)
    }

    /// Radius sqrt(N(z)) and 7 angles. The first six lie in [0, pi], the last
    /// is atan2(x7, x6) in (-pi, pi]. Angles that are undetermined (a vanishing
    /// tail of coordinates) come out as 0.
    pub fn polar(&self) -> (f64, [f64; 7]) {
        let x = self.coords();

        // tail[k] = |(x_k, ..., x_7)|
        let mut tail = [0.0; 8];
        tail[7] = x[7].abs();
        for k in (0..7).rev() {
            tail[k] = tail[k + 1].hypot(x[k]);
        }

        let mut theta = [0.0; 7];
        for k in 0..6 {
            theta[k] = tail[k + 1].atan2(x[k]);
        }
        theta[6] = x[7].atan2(x[6]);

        (tail[0], theta)
    }
}
