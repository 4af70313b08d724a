// src/error.rs
// Error types for octonion arithmetic.

use thiserror::Error;

/// Failures of the division-like operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AlgebraError {
    /// The divisor is the additive identity (all 8 coordinates exactly 0).
    #[error("{op}")]
    ZeroDivisor {
        /// "inverse of zero" or "denominator is zero"
        op: &'static str,
    },

    /// The divisor is a nonzero isotropic element (quadrance exactly 0).
    /// Only reported by the checked operations.
    #[error("divisor is a null element (quadrance {quadrance})")]
    NullDivisor {
        /// Quadrance of the rejected divisor
        quadrance: f64,
    },

    /// Random sampling was asked for a negative or non-finite spread.
    #[error("invalid sampling scale: {scale}")]
    InvalidScale { scale: f64 },
}

impl AlgebraError {
    pub(crate) fn inverse_of_zero() -> Self {
        Self::ZeroDivisor {
            op: "inverse of zero",
        }
    }

    pub(crate) fn denominator_is_zero() -> Self {
        Self::ZeroDivisor {
            op: "denominator is zero",
        }
    }

    /// True for the zero-divisor case, whichever operation raised it.
    pub fn is_zero_divisor(&self) -> bool {
        matches!(self, Self::ZeroDivisor { .. })
    }
}
