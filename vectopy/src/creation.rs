//! NumPy style constructors: [array()], [zeros()], [ones()], [full()] and [arange()].
//!
//! ```rust
//! # use vectopy::prelude::*;
//! let a = array([1, 2, 3]).unwrap();
//! assert_eq!(a.dtype(), Dtype::Integer);
//!
//! let b = array([1.0, 2.5]).unwrap();
//! assert_eq!(b.dtype(), Dtype::Float);
//!
//! let c = arange_step(0, 10, 3).unwrap();
//! assert_eq!(c.as_i64_slice(), Some(&[0, 3, 6, 9][..]));
//! ```

use vectopy_core::{
    array::{Error, VectoPyArray},
    dtypes::{Dtype, Scalar},
};

/// Creates an array from a sequence of numbers.
///
/// The dtype is [Dtype::Float] if any element is a float, otherwise
/// [Dtype::Integer]. An empty sequence is an error.
pub fn array<T: Into<Scalar>>(seq: impl IntoIterator<Item = T>) -> Result<VectoPyArray, Error> {
    let values: Vec<Scalar> = seq.into_iter().map(Into::into).collect();
    let dtype = values
        .iter()
        .map(Scalar::dtype)
        .reduce(Dtype::promote)
        .ok_or(Error::EmptySequence)?;
    VectoPyArray::new(&[values.len()], dtype, Some(&values))
}

/// Like [array()], but every element is converted to `dtype`. Floats become
/// integers by truncation toward zero.
pub fn array_with_dtype<T: Into<Scalar>>(
    seq: impl IntoIterator<Item = T>,
    dtype: Dtype,
) -> Result<VectoPyArray, Error> {
    let values: Vec<Scalar> = seq.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(Error::EmptySequence);
    }
    VectoPyArray::new(&[values.len()], dtype, Some(&values))
}

/// `n` float zeros.
pub fn zeros(n: usize) -> VectoPyArray {
    zeros_with_dtype(n, Dtype::Float)
}

pub fn zeros_with_dtype(n: usize, dtype: Dtype) -> VectoPyArray {
    VectoPyArray::zeros(n, dtype)
}

/// `n` float ones.
pub fn ones(n: usize) -> VectoPyArray {
    ones_with_dtype(n, Dtype::Float)
}

pub fn ones_with_dtype(n: usize, dtype: Dtype) -> VectoPyArray {
    VectoPyArray::full(n, dtype.one())
}

/// `n` copies of `value`, the dtype follows `value`.
pub fn full(n: usize, value: impl Into<Scalar>) -> VectoPyArray {
    VectoPyArray::full(n, value.into())
}

/// `n` copies of `value` converted to `dtype`.
pub fn full_with_dtype(
    n: usize,
    value: impl Into<Scalar>,
    dtype: Dtype,
) -> Result<VectoPyArray, Error> {
    let value = value.into().cast(dtype)?;
    Ok(VectoPyArray::full(n, value))
}

/// `0, 1, ..., stop - 1` as an integer array. See [arange_step].
pub fn arange(stop: i64) -> Result<VectoPyArray, Error> {
    arange_step(0, stop, 1)
}

/// The half open range `start, start + step, ...` stopping before `stop`,
/// as an integer array. `step` may be negative but not zero, and the range
/// must contain at least one element.
///
/// ```rust
/// # use vectopy::prelude::*;
/// let a = arange_step(5, 0, -2).unwrap();
/// assert_eq!(a.as_i64_slice(), Some(&[5, 3, 1][..]));
/// assert_eq!(arange_step(3, 3, 1), Err(Error::EmptyRange));
/// ```
pub fn arange_step(start: i64, stop: i64, step: i64) -> Result<VectoPyArray, Error> {
    if step == 0 {
        return Err(Error::Domain("arange: step must not be zero"));
    }
    let (start, stop, step) = (start as i128, stop as i128, step as i128);
    let len = if step > 0 {
        (stop - start + step - 1).div_euclid(step)
    } else {
        (start - stop - step - 1).div_euclid(-step)
    };
    if len <= 0 {
        return Err(Error::EmptyRange);
    }
    // every value lies between start and stop, so it fits in an i64
    let data = (0..len).map(|i| (start + i * step) as i64).collect();
    Ok(VectoPyArray::from_vec_i64(data))
}
