//! The [VectoPyArray] struct, and the [Error] type shared by every operation.
//!
//! An array is a shape, `(n,)`, together with a typed [Buffer] of `n`
//! elements. The buffer is exclusively owned by the array; operations
//! that produce arrays (slicing included) always allocate fresh storage.
//!
//! Creating arrays:
//! ```rust
//! # use vectopy_core::prelude::*;
//! let a = VectoPyArray::new(&[3], Dtype::Float, None).unwrap();
//! assert_eq!(a.to_f64_vec(), vec![0.0; 3]);
//!
//! let b = VectoPyArray::new(&[2], Dtype::Integer, Some(&[Scalar::Int(1), Scalar::Float(2.9)])).unwrap();
//! assert_eq!(b.as_i64_slice(), Some(&[1, 2][..]));
//!
//! assert!(VectoPyArray::new(&[2, 2], Dtype::Float, None).is_err());
//! ```

mod buffer;
mod error;
mod index;
mod iterate;

pub use buffer::Buffer;
pub(crate) use buffer::dispatch;
pub use error::Error;
pub use iterate::Iter;

use crate::{
    dtypes::{Dtype, Element, Scalar},
    shapes::{check_rank, Shape},
};

/// The core one dimensional array.
///
/// See the [module docs](self) for how to create one, and
/// [crate::array_ops] for everything you can do with it.
#[derive(Debug, Clone)]
pub struct VectoPyArray {
    shape: Shape,
    buffer: Buffer,
}

impl VectoPyArray {
    /// Creates an array of the given `shape` and `dtype`.
    ///
    /// With a `buffer`, its elements are copied and converted to `dtype`;
    /// without one the array is filled with zeros.
    pub fn new(shape: &[usize], dtype: Dtype, buffer: Option<&[Scalar]>) -> Result<Self, Error> {
        let shape = check_rank(shape)?;
        let buffer = match buffer {
            None => Buffer::zeros(dtype, shape.0),
            Some(values) => {
                if values.len() != shape.0 {
                    return Err(Error::WrongNumElements {
                        expected: shape.0,
                        found: values.len(),
                    });
                }
                match dtype {
                    Dtype::Integer => Buffer::Integer(convert(values)?),
                    Dtype::Float => Buffer::Float(convert(values)?),
                }
            }
        };
        Ok(Self::from_buffer(buffer))
    }

    /// An array of `len` zeros.
    pub fn zeros(len: usize, dtype: Dtype) -> Self {
        Self::from_buffer(Buffer::zeros(dtype, len))
    }

    /// An array of `len` copies of `value`, with the dtype of `value`.
    pub fn full(len: usize, value: Scalar) -> Self {
        match value {
            Scalar::Int(v) => Self::from_vec_i64(vec![v; len]),
            Scalar::Float(v) => Self::from_vec_f64(vec![v; len]),
        }
    }

    pub fn from_vec_i64(data: Vec<i64>) -> Self {
        Self::from_buffer(Buffer::Integer(data))
    }

    pub fn from_vec_f64(data: Vec<f64>) -> Self {
        Self::from_buffer(Buffer::Float(data))
    }

    /// Wraps freshly computed elements, the dtype follows `E`.
    pub fn from_elements<E: Element>(data: Vec<E>) -> Self {
        Self::from_buffer(E::into_buffer(data))
    }

    pub fn from_buffer(buffer: Buffer) -> Self {
        Self {
            shape: (buffer.len(),),
            buffer,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn dtype(&self) -> Dtype {
        self.buffer.dtype()
    }

    /// Number of elements, always equal to `shape().0`.
    pub fn size(&self) -> usize {
        self.shape.0
    }

    pub fn len(&self) -> usize {
        self.shape.0
    }

    pub fn is_empty(&self) -> bool {
        self.shape.0 == 0
    }

    /// Simulated bytes per element, see [Dtype::itemsize].
    pub fn itemsize(&self) -> usize {
        self.dtype().itemsize()
    }

    /// Simulated total memory footprint, `size * itemsize`.
    pub fn nbytes(&self) -> usize {
        self.size() * self.itemsize()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn as_i64_slice(&self) -> Option<&[i64]> {
        match &self.buffer {
            Buffer::Integer(data) => Some(data),
            Buffer::Float(_) => None,
        }
    }

    pub fn as_f64_slice(&self) -> Option<&[f64]> {
        match &self.buffer {
            Buffer::Integer(_) => None,
            Buffer::Float(data) => Some(data),
        }
    }

    /// Copies the elements out as [Scalar]s.
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.iter().collect()
    }

    /// Copies the elements out, widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.iter().map(Scalar::to_f64).collect()
    }

    /// Views the elements as `E`, converting only if the dtype differs.
    pub(crate) fn elements<E: Element>(&self) -> Result<std::borrow::Cow<'_, [E]>, Error> {
        E::from_buffer(&self.buffer)
    }
}

fn convert<E: Element>(values: &[Scalar]) -> Result<Vec<E>, Error> {
    values.iter().map(|&v| E::from_scalar(v)).collect()
}

/// Arrays are equal when their dtypes are equal and their elements are
/// pairwise equal.
impl PartialEq for VectoPyArray {
    fn eq(&self, other: &Self) -> bool {
        self.dtype() == other.dtype() && self.shape == other.shape && self.buffer == other.buffer
    }
}

impl std::fmt::Display for VectoPyArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VectoPyArray([")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "], dtype={})", self.dtype())
    }
}
