//! Seedable random array construction, the counterpart of `np.random`.
//!
//! ```rust
//! # use vectopy::prelude::*;
//! let mut rng = RandomState::seed_from_u64(42);
//! let a = rng.uniform(5, 0.0, 1.0).unwrap();
//! assert!(a.iter().all(|x| (0.0..1.0).contains(&x.to_f64())));
//!
//! let mut again = RandomState::seed_from_u64(42);
//! assert_eq!(again.uniform(5, 0.0, 1.0).unwrap(), a);
//! ```

use rand::{distributions::Distribution, rngs::StdRng, SeedableRng};
use rand_distr::{Normal, Uniform};
use vectopy_core::array::{Error, VectoPyArray};

/// A random number generator that produces arrays. The same seed always
/// produces the same sequence of arrays.
#[derive(Clone, Debug)]
pub struct RandomState {
    rng: StdRng,
}

impl Default for RandomState {
    /// Seeded with `0`.
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl RandomState {
    /// Constructs rng with the given seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `n` floats drawn uniformly from `[low, high)`.
    pub fn uniform(&mut self, n: usize, low: f64, high: f64) -> Result<VectoPyArray, Error> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(Error::Domain("uniform: expected finite low < high"));
        }
        // `Uniform` rescales the range by slightly more than one
        if !((high - low) / (1.0 - f64::EPSILON)).is_finite() {
            return Err(Error::Domain("uniform: range overflow"));
        }
        let distr = Uniform::new(low, high);
        Ok(VectoPyArray::from_vec_f64(self.sample(n, distr)))
    }

    /// `n` floats drawn from a normal distribution.
    pub fn normal(&mut self, n: usize, mean: f64, std: f64) -> Result<VectoPyArray, Error> {
        if !mean.is_finite() {
            return Err(Error::Domain("normal: mean must be finite"));
        }
        if !(std.is_finite() && std >= 0.0) {
            return Err(Error::Domain("normal: std must be finite and non-negative"));
        }
        let distr = Normal::new(mean, std)
            .map_err(|_| Error::Domain("normal: std must be finite and non-negative"))?;
        Ok(VectoPyArray::from_vec_f64(self.sample(n, distr)))
    }

    /// `n` integers drawn uniformly from the half open range `[low, high)`.
    pub fn integers(&mut self, n: usize, low: i64, high: i64) -> Result<VectoPyArray, Error> {
        if low >= high {
            return Err(Error::Domain("integers: expected low < high"));
        }
        let distr = Uniform::new(low, high);
        Ok(VectoPyArray::from_vec_i64(self.sample(n, distr)))
    }

    fn sample<E, D: Distribution<E>>(&mut self, n: usize, distr: D) -> Vec<E> {
        distr.sample_iter(&mut self.rng).take(n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_arrays() {
        let mut a = RandomState::seed_from_u64(7);
        let mut b = RandomState::seed_from_u64(7);
        assert_eq!(a.normal(8, 0.0, 1.0), b.normal(8, 0.0, 1.0));
        assert_eq!(a.integers(8, -3, 3), b.integers(8, -3, 3));
    }

    #[test]
    fn test_integers_in_range() {
        let mut rng = RandomState::default();
        let a = rng.integers(100, 1, 7).unwrap();
        assert_eq!(a.len(), 100);
        assert!(a.as_i64_slice().unwrap().iter().all(|x| (1..7).contains(x)));
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = RandomState::seed_from_u64(1);
        let a = rng.normal(10_000, 5.0, 2.0).unwrap();
        assert!((a.mean().unwrap() - 5.0).abs() < 0.1);
        assert!((a.std().unwrap() - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = RandomState::default();
        assert!(rng.uniform(3, 1.0, 1.0).is_err());
        assert!(rng.uniform(3, 0.0, f64::INFINITY).is_err());
        assert!(rng.normal(3, 0.0, -1.0).is_err());
        assert!(rng.normal(3, 0.0, f64::NAN).is_err());
        assert!(rng.normal(3, 0.0, f64::INFINITY).is_err());
        assert!(rng.uniform(3, -1e308, 1e308).is_err());
        assert!(rng.uniform(3, 0.0, f64::MAX).is_err());
        assert!(rng.integers(3, 5, 5).is_err());
    }

    #[test]
    fn test_zero_std_is_constant() {
        let mut rng = RandomState::default();
        let a = rng.normal(4, 3.0, 0.0).unwrap();
        assert_eq!(a, VectoPyArray::from_vec_f64(vec![3.0; 4]));
    }

    #[test]
    fn test_zero_length() {
        let mut rng = RandomState::default();
        assert!(rng.uniform(0, 0.0, 1.0).unwrap().is_empty());
    }
}
