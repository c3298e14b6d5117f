//! Operations on [VectoPyArray]s, like [add()], [VectoPyArray::dot], [VectoPyArray::mean], etc.
//!
//! Every operation is pure: it reads the receiver and returns a new array or
//! value.
//!
//! # Fallible vs infallible
//!
//! Arithmetic comes in two forms. The `std::ops` operators (`+ - * /`) panic
//! on error, the `try_*` methods from [TryAdd], [TrySub], [TryMul] and
//! [TryDiv] return a [Result]:
//!
//! ```rust
//! # use vectopy_core::prelude::*;
//! let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
//! let b = VectoPyArray::from_vec_i64(vec![4, 5]);
//! assert!(a.try_add(&b).is_err());
//! ```
//!
//! # Operands and promotion
//!
//! The right hand side of an arithmetic operation is either another array of
//! the same shape or a single number (see [TryIntoOperand]). The result dtype
//! is [Dtype::promote] of the two sides, except true division which always
//! produces floats:
//!
//! ```rust
//! # use vectopy_core::prelude::*;
//! let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
//! assert_eq!((&a * 2).dtype(), Dtype::Integer);
//! assert_eq!((&a * 2.0).dtype(), Dtype::Float);
//! assert_eq!((&a / 10).as_f64_slice(), Some(&[1.0, 2.0, 3.0][..]));
//! ```
//!
//! # Groups
//!
//! - Statistics: `sum`, `min`, `max`, `mean`, `var`, `std`, `median`, `mode`.
//! - Algorithms: `majority_element`, `unique`, `is_monotonic`.
//! - Time series: `moving_average`, `diff`, `cumulative_sum`, `shift`.
//! - Transformations: `normalize`, `clip`, `reverse`, `minmax_scale`.
//! - Conversion: `astype`.

#[cfg(doc)]
use crate::{array::VectoPyArray, dtypes::Dtype};

pub mod utilities;

mod add;
mod algorithms;
mod astype;
mod div;
mod dot;
mod mul;
mod statistics;
mod sub;
mod time_series;
mod transformations;

pub use add::{add, TryAdd};
pub use div::{div, TryDiv};
pub use dot::dot;
pub use mul::{mul, TryMul};
pub use statistics::Mode;
pub use sub::{sub, TrySub};
pub use utilities::{BinaryKernelOp, Operand, TryIntoOperand};
