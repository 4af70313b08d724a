// src/sample.rs
// Random octonions for tests, benchmarks and the demo.

use crate::doubling::{Form, Octonion};
use crate::error::AlgebraError;
use crate::hamilton::Hamilton;
use crate::klein::Split;
use rand::Rng;
use rand_distr::{Distribution, Normal};

fn gaussian_quaternion<R: Rng + ?Sized>(rng: &mut R, dist: &Normal<f64>) -> Hamilton {
    Hamilton::new(dist.sample(rng), dist.sample(rng), dist.sample(rng), dist.sample(rng))
}

// --- CONFIGURATION ---
// Degenerate draws of the second half tolerated by `sample_null` before giving up.
const MAX_NULL_RESAMPLES: usize = 64;

// rand_distr only rejects non-finite spreads, so the sign is checked here
fn normal(scale: f64) -> Result<Normal<f64>, AlgebraError> {
    if !(scale >= 0.0 && scale.is_finite()) {
        return Err(AlgebraError::InvalidScale { scale });
    }
    Normal::new(0.0, scale).map_err(|_| AlgebraError::InvalidScale { scale })
}

impl<F: Form> Octonion<F> {
    /// Each coordinate drawn independently from N(0, scale^2).
    pub fn sample_gaussian<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Result<Self, AlgebraError> {
        let dist = normal(scale)?;
        let l = gaussian_quaternion(rng, &dist);
        let r = gaussian_quaternion(rng, &dist);
        Ok(Self::from_halves(l, r))
    }
}

impl Octonion<Split> {
    /// A split octonion on the light cone: the second half is rescaled so that
    /// N(p) = N(q). The quadrance is zero up to rounding, not exactly.
    ///
    /// A zero scale is rejected, as is a scale so small that the squared
    /// coordinates keep underflowing to 0.
    pub fn sample_null<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Result<Self, AlgebraError> {
        if scale == 0.0 {
            return Err(AlgebraError::InvalidScale { scale });
        }
        let dist = normal(scale)?;
        let p = gaussian_quaternion(rng, &dist);
        let q = (0..MAX_NULL_RESAMPLES)
            .map(|_| gaussian_quaternion(rng, &dist))
            .find(|q| q.quad() > 0.0)
            .ok_or(AlgebraError::InvalidScale { scale })?;
        let q = q.dil((p.quad() / q.quad()).sqrt());
        Ok(Self::from_halves(p, q))
    }
}

#[cfg(test)]
mod tests {
    use crate::cayley::Cayley;
    use crate::error::AlgebraError;
    use crate::klein::Klein;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn gaussian_sampling_is_seeded() {
        let a = Cayley::sample_gaussian(&mut StdRng::seed_from_u64(7), 1.0).unwrap();
        let b = Cayley::sample_gaussian(&mut StdRng::seed_from_u64(7), 1.0).unwrap();
        assert_eq!(a, b);
        assert!(a.quad() > 0.0);
    }

    #[test]
    fn rejects_bad_scale() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Klein::sample_gaussian(&mut rng, -1.0),
            Err(AlgebraError::InvalidScale { scale: -1.0 })
        );
    }

    #[test]
    fn rejects_degenerate_null_scale() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Klein::sample_null(&mut rng, 0.0),
            Err(AlgebraError::InvalidScale { scale: 0.0 })
        );
        assert_eq!(
            Klein::sample_null(&mut rng, 1e-200),
            Err(AlgebraError::InvalidScale { scale: 1e-200 })
        );
        assert!(Klein::sample_null(&mut rng, f64::NAN).is_err());
        assert!(Cayley::sample_gaussian(&mut rng, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_scale_gaussian_is_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(Cayley::sample_gaussian(&mut rng, 0.0).unwrap().is_zero());
    }

    #[test]
    fn null_samples_sit_on_the_light_cone() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let x = Klein::sample_null(&mut rng, 3.0).unwrap();
            let euclid = x.l.quad() + x.r.quad();
            assert!(x.quad().abs() <= 1e-12 * euclid);
        }
    }
}
