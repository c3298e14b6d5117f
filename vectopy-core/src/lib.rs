//! # vectopy-core
//!
//! The array type and operations behind `vectopy`, an educational NumPy-like
//! library for one dimensional numeric arrays.
//!
//! # Arrays & Dtypes
//!
//! *See [dtypes], [shapes], and [array] for more information.*
//!
//! A [`array::VectoPyArray`] is a homogeneous, fixed length vector of numbers.
//! It has two parts:
//! 1. Shape ([shapes]) - always `(n,)`, only rank 1 arrays exist.
//! 2. Dtype ([dtypes]) - either [`dtypes::Dtype::Integer`] or [`dtypes::Dtype::Float`].
//!
//! Elements are backed by `i64` for integer arrays and `f64` for float arrays.
//! A single element is handed out as a [`dtypes::Scalar`].
//!
//! ```rust
//! # use vectopy_core::prelude::*;
//! let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
//! assert_eq!(a.shape(), (3,));
//! assert_eq!(a.dtype(), Dtype::Integer);
//! assert_eq!(a.get(-1).unwrap(), Scalar::Int(3));
//! ```
//!
//! # Array Operations
//!
//! *See [array_ops] for more information*
//!
//! Every operation returns a new array, the receiver is never mutated.
//!
//! | Operation | vectopy | numpy |
//! | --- | --- | --- |
//! | Binary Operations | `&a + &b` | `a + b` |
//! | Scalar Operations | `&a * 2.0` | `a * 2.0` |
//! | Dot product | `a.dot(&b)` | `np.dot(a, b)` |
//! | Slicing | `a.slice(1..4)` | `a[1:4]` |
//! | Statistics | `a.mean()`, `a.std()` | `a.mean()`, `a.std()` |
//! | Cast | `a.astype(Dtype::Float)` | `a.astype(float)` |
//! | Clip | `a.clip(0, 100)` | `np.clip(a, 0, 100)` |
//! | Cumulative sum | `a.cumulative_sum()` | `np.cumsum(a)` |

pub mod array;
pub mod array_ops;
pub mod dtypes;
pub mod shapes;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::array::*;
    pub use crate::array_ops::*;
    pub use crate::dtypes::*;
    pub use crate::shapes::*;
}
