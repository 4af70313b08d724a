// src/lib.rs
// Cayley (definite) and Klein (split) octonions over f64, both built from
// Hamilton quaternions by one Cayley-Dickson doubling step.

pub mod cayley;
pub mod doubling;
pub mod error;
pub mod hamilton;
pub mod klein;
pub mod render;
pub mod sample;
pub mod special;

pub use cayley::{Cayley, Definite};
pub use doubling::{associator, commutator, Form, Octonion};
pub use error::AlgebraError;
pub use hamilton::Hamilton;
pub use klein::{Klein, Split};

// --- CONFIGURATION ---
// Absolute per-coordinate tolerance for `Octonion::approx_eq`.
// Equality through `==` is always exact.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;
