//! # vectopy
//!
//! vectopy is a small, NumPy-like library for one dimensional numeric
//! arrays, written to show how an array library works on the inside.
//!
//! The array type and all of its operations live in `vectopy-core` and are
//! re-exported here. This crate adds the NumPy style entry points:
//! - [creation] - `array`, `zeros`, `ones`, `full`, `arange`.
//! - [random] - seeded random arrays (feature `random`, on by default).
//! - [educational] - `explain`, `visualize` and `benchmark`.
//!
//! ```rust
//! use vectopy::prelude::*;
//!
//! let prices = array([100, 105, 110, 115, 120, 125]).unwrap();
//! let returns = prices.diff().unwrap();
//! assert_eq!(returns.as_i64_slice(), Some(&[5, 5, 5, 5, 5][..]));
//!
//! let scaled = &prices * 0.5;
//! assert_eq!(scaled.dtype(), Dtype::Float);
//! assert_eq!(scaled.get(0).unwrap(), Scalar::Float(50.0));
//!
//! let ma = prices.moving_average(3).unwrap();
//! assert_eq!(ma.len(), 4);
//! ```
//!
//! # Feature flags
//!
//! - `random` (default): enables [random], pulling in `rand` and `rand_distr`.

pub mod creation;
pub mod educational;
#[cfg(feature = "random")]
pub mod random;

pub use vectopy_core::*;

pub mod prelude {
    pub use crate::creation::*;
    pub use crate::educational::*;
    #[cfg(feature = "random")]
    pub use crate::random::*;
    pub use vectopy_core::prelude::*;
}
