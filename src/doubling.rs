// src/doubling.rs
// The Cayley-Dickson doubling step, written once and parametrized by the sign
// of the norm form. Cayley (definite) and Klein (split) octonions are the two
// instantiations of `Octonion<F>`.
//
// A value is a pair of quaternions (a, b) read as a + b e, where e is the
// doubling generator:
//
//   (a, b)(c, d) = (ac - SIGN d*b, da + b c*)
//   (a, b)*      = (a*, -b)
//   N(a, b)      = N(a) + SIGN N(b)

use crate::error::AlgebraError;
use crate::hamilton::Hamilton;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::{debug, warn};

/// Selects which of the two real octonion algebras a value lives in.
pub trait Form: Copy + Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// +1 for the positive-definite norm, -1 for the indefinite one.
    const SIGN: f64;
    /// Basis symbols of coordinates 1..=7, used by `Display`.
    const SYMBOLS: [&'static str; 7];
}

// ============================================================================
// Value type
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Octonion<F: Form> {
    pub l: Hamilton, // coordinates 0-3
    pub r: Hamilton, // coordinates 4-7
    form: PhantomData<F>,
}

impl<F: Form> Octonion<F> {
    /// Builds a value from its 8 real coordinates.
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64) -> Self {
        Self::from_halves(Hamilton::new(a, b, c, d), Hamilton::new(e, f, g, h))
    }

    pub fn from_halves(l: Hamilton, r: Hamilton) -> Self {
        Octonion {
            l,
            r,
            form: PhantomData,
        }
    }

    pub fn from_coords(c: [f64; 8]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7])
    }

    pub fn coords(&self) -> [f64; 8] {
        let mut c = [0.0; 8];
        c[0..4].copy_from_slice(&self.l.c);
        c[4..8].copy_from_slice(&self.r.c);
        c
    }

    pub fn zero() -> Self {
        Self::from_halves(Hamilton::zero(), Hamilton::zero())
    }

    pub fn one() -> Self {
        Self::from_halves(Hamilton::one(), Hamilton::zero())
    }

    /// The unit basis element e_n (e_0 = 1), or `None` past e_7.
    pub fn basis(n: usize) -> Option<Self> {
        if n >= 8 {
            return None;
        }
        let mut c = [0.0; 8];
        c[n] = 1.0;
        Some(Self::from_coords(c))
    }

    /// Exact check against the additive identity. -0.0 counts as zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Coordinatewise comparison with an absolute tolerance. `==` stays exact;
    /// this is the only place a tolerance enters.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.coords()
            .iter()
            .zip(other.coords().iter())
            .all(|(a, b)| (a - b).abs() <= tol)
    }

    // --- SCALING ---

    /// Dilation by a real scalar.
    pub fn dil(&self, a: f64) -> Self {
        Self::from_halves(self.l.dil(a), self.r.dil(a))
    }

    /// Scale on the left by a quaternion: h(a, b) = (ha, hb).
    /// Agrees with the full product only when h is real.
    pub fn scal_l(&self, h: Hamilton) -> Self {
        Self::from_halves(h * self.l, h * self.r)
    }

    /// Scale on the right by a quaternion: (a, b)h = (ah, bh).
    pub fn scal_r(&self, h: Hamilton) -> Self {
        Self::from_halves(self.l * h, self.r * h)
    }

    // --- NORM FORM ---

    pub fn conj(&self) -> Self {
        Self::from_halves(self.l.conj(), -self.r)
    }

    /// Quadrance N(a) + SIGN N(b). Never negative for the definite form.
    pub fn quad(&self) -> f64 {
        self.l.quad() + F::SIGN * self.r.quad()
    }

    /// Nonzero with quadrance exactly 0. Only the split form has these.
    pub fn is_null(&self) -> bool {
        !self.is_zero() && self.quad() == 0.0
    }

    // --- DIVISION ---

    /// Multiplicative inverse conj(y) / N(y).
    ///
    /// Only the literal zero value is rejected. A nonzero null element goes
    /// through and yields Inf/NaN coordinates; use [`Octonion::checked_inv`]
    /// to reject those as well.
    pub fn inv(&self) -> Result<Self, AlgebraError> {
        if self.is_zero() {
            debug!("rejected inverse of the zero octonion");
            return Err(AlgebraError::inverse_of_zero());
        }
        let n = self.quad();
        if n == 0.0 {
            warn!(value = ?self.coords(), "inverting a null element, result is not finite");
        }
        Ok(self.conj().dil(1.0 / n))
    }

    /// Right quotient x conj(y) / N(y), with the same guard as `inv`.
    pub fn quo(&self, y: &Self) -> Result<Self, AlgebraError> {
        if y.is_zero() {
            debug!("rejected quotient by the zero octonion");
            return Err(AlgebraError::denominator_is_zero());
        }
        let n = y.quad();
        if n == 0.0 {
            warn!(divisor = ?y.coords(), "dividing by a null element, result is not finite");
        }
        Ok((*self * y.conj()).dil(1.0 / n))
    }

    /// Like `inv`, but a null element is an error instead of Inf/NaN output.
    pub fn checked_inv(&self) -> Result<Self, AlgebraError> {
        self.reject_null()?;
        self.inv()
    }

    /// Like `quo`, but a null divisor is an error instead of Inf/NaN output.
    pub fn checked_quo(&self, y: &Self) -> Result<Self, AlgebraError> {
        y.reject_null()?;
        self.quo(y)
    }

    fn reject_null(&self) -> Result<(), AlgebraError> {
        if self.is_null() {
            return Err(AlgebraError::NullDivisor {
                quadrance: self.quad(),
            });
        }
        Ok(())
    }

    // --- DEFECT FORMS ---

    pub fn commutator(&self, y: &Self) -> Self {
        commutator(*self, *y)
    }

    pub fn associator(&self, x: &Self, y: &Self) -> Self {
        associator(*self, *x, *y)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<F: Form> Add for Octonion<F> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_halves(self.l + other.l, self.r + other.r)
    }
}

impl<F: Form> Sub for Octonion<F> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_halves(self.l - other.l, self.r - other.r)
    }
}

impl<F: Form> Neg for Octonion<F> {
    type Output = Self;
    fn neg(self) -> Self {
        self.dil(-1.0)
    }
}

impl<F: Form> Mul<f64> for Octonion<F> {
    type Output = Self;
    fn mul(self, a: f64) -> Self {
        self.dil(a)
    }
}

// Noncommutative, nonassociative product. Operands arrive by value, so
// `z = z * z` reads both halves before anything is written.
impl<F: Form> Mul for Octonion<F> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let (a, b) = (self.l, self.r);
        let (c, d) = (other.l, other.r);

        let first = a * c - (d.conj() * b).dil(F::SIGN);
        let second = d * a + b * c.conj();

        Self::from_halves(first, second)
    }
}

// The Commutator: [X, Y] = XY - YX
pub fn commutator<F: Form>(x: Octonion<F>, y: Octonion<F>) -> Octonion<F> {
    (x * y) - (y * x)
}

// The Associator: [W, X, Y] = (WX)Y - W(XY)
pub fn associator<F: Form>(w: Octonion<F>, x: Octonion<F>, y: Octonion<F>) -> Octonion<F> {
    ((w * x) * y) - (w * (x * y))
}
