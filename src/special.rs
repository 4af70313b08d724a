// src/special.rs
// Octonionic infinities and NaNs, shared by both forms.

use crate::doubling::{Form, Octonion};
use crate::hamilton::Hamilton;

impl<F: Form> Octonion<F> {
    /// Octonionic infinity: one sign indicator per coordinate, >= 0 for +Inf.
    pub fn inf(signs: [i8; 8]) -> Self {
        let (lo, hi) = signs.split_at(4);
        Self::from_halves(
            Hamilton::inf([lo[0], lo[1], lo[2], lo[3]]),
            Hamilton::inf([hi[0], hi[1], hi[2], hi[3]]),
        )
    }

    pub fn nan() -> Self {
        Self::from_halves(Hamilton::nan(), Hamilton::nan())
    }

    /// True if any coordinate is infinite.
    pub fn is_inf(&self) -> bool {
        self.l.is_inf() || self.r.is_inf()
    }

    /// True if some coordinate is NaN and none is infinite.
    pub fn is_nan(&self) -> bool {
        if self.is_inf() {
            return false;
        }
        self.l.is_nan() || self.r.is_nan()
    }
}
