// src/hamilton.rs
// Hamilton quaternions over f64: a + bi + cj + dk.
// This is the 4-dim algebra the octonions are doubled from.

use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hamilton {
    pub c: [f64; 4],
}

impl Hamilton {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Hamilton { c: [a, b, c, d] }
    }

    pub fn zero() -> Self {
        Hamilton { c: [0.0; 4] }
    }

    pub fn one() -> Self {
        Hamilton::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Quaternionic infinity. Every coordinate is infinite, positive when its
    /// sign indicator is >= 0 and negative otherwise.
    pub fn inf(signs: [i8; 4]) -> Self {
        let mut c = [0.0; 4];
        for (x, &s) in c.iter_mut().zip(signs.iter()) {
            *x = if s >= 0 { f64::INFINITY } else { f64::NEG_INFINITY };
        }
        Hamilton { c }
    }

    pub fn nan() -> Self {
        Hamilton { c: [f64::NAN; 4] }
    }

    pub fn is_inf(&self) -> bool {
        self.c.iter().any(|x| x.is_infinite())
    }

    // Infinity wins over NaN
    pub fn is_nan(&self) -> bool {
        !self.is_inf() && self.c.iter().any(|x| x.is_nan())
    }

    /// Scale every coordinate by the real `a`.
    pub fn dil(&self, a: f64) -> Self {
        Hamilton {
            c: [self.c[0] * a, self.c[1] * a, self.c[2] * a, self.c[3] * a],
        }
    }

    // Conjugate: real part stays, imaginary parts negated
    pub fn conj(&self) -> Self {
        Hamilton::new(self.c[0], -self.c[1], -self.c[2], -self.c[3])
    }

    /// Sum of squares of the four coordinates.
    pub fn quad(&self) -> f64 {
        self.c.iter().map(|x| x * x).sum()
    }
}

impl Add for Hamilton {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut res = [0.0; 4];
        for i in 0..4 {
            res[i] = self.c[i] + other.c[i];
        }
        Hamilton { c: res }
    }
}

impl Sub for Hamilton {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut res = [0.0; 4];
        for i in 0..4 {
            res[i] = self.c[i] - other.c[i];
        }
        Hamilton { c: res }
    }
}

impl Neg for Hamilton {
    type Output = Self;
    fn neg(self) -> Self {
        self.dil(-1.0)
    }
}

// Hamilton product, i^2 = j^2 = k^2 = ijk = -1
impl Mul for Hamilton {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let x = &self.c;
        let y = &other.c;
        Hamilton::new(
            x[0] * y[0] - x[1] * y[1] - x[2] * y[2] - x[3] * y[3],
            x[0] * y[1] + x[1] * y[0] + x[2] * y[3] - x[3] * y[2],
            x[0] * y[2] - x[1] * y[3] + x[2] * y[0] + x[3] * y[1],
            x[0] * y[3] + x[1] * y[2] - x[2] * y[1] + x[3] * y[0],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_follow_hamilton_rules() {
        let i = Hamilton::new(0.0, 1.0, 0.0, 0.0);
        let j = Hamilton::new(0.0, 0.0, 1.0, 0.0);
        let k = Hamilton::new(0.0, 0.0, 0.0, 1.0);
        let minus_one = Hamilton::new(-1.0, 0.0, 0.0, 0.0);

        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!((i * j) * k, minus_one);
    }

    #[test]
    fn quadrance_is_multiplicative() {
        let p = Hamilton::new(1.0, 2.0, 3.0, 4.0);
        let q = Hamilton::new(-2.0, 0.5, 1.0, 3.0);
        assert_eq!((p * q).quad(), p.quad() * q.quad());
        assert_eq!(p * p.conj(), Hamilton::new(p.quad(), 0.0, 0.0, 0.0));
    }

    #[test]
    fn inf_takes_precedence_over_nan() {
        let mixed = Hamilton::new(f64::NAN, f64::INFINITY, 0.0, 0.0);
        assert!(mixed.is_inf());
        assert!(!mixed.is_nan());
        assert!(Hamilton::nan().is_nan());

        let h = Hamilton::inf([1, -1, 0, -3]);
        assert_eq!(h.c[0], f64::INFINITY);
        assert_eq!(h.c[1], f64::NEG_INFINITY);
        assert_eq!(h.c[2], f64::INFINITY);
        assert_eq!(h.c[3], f64::NEG_INFINITY);
    }
}
