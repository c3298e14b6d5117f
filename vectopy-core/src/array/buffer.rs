use crate::dtypes::{Dtype, Scalar};

/// Typed backing storage of an array. The variant is the array's dtype,
/// so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    Integer(Vec<i64>),
    Float(Vec<f64>),
}

/// Runs `$body` with `$data` bound to the typed slice of a [Buffer].
/// The body is compiled once per element type.
macro_rules! dispatch {
    ($buffer:expr, |$data:ident| $body:expr) => {
        match $buffer {
            $crate::array::Buffer::Integer($data) => $body,
            $crate::array::Buffer::Float($data) => $body,
        }
    };
}
pub(crate) use dispatch;

impl Buffer {
    pub(crate) fn zeros(dtype: Dtype, len: usize) -> Self {
        match dtype {
            Dtype::Integer => Buffer::Integer(vec![0; len]),
            Dtype::Float => Buffer::Float(vec![0.0; len]),
        }
    }

    pub(crate) fn dtype(&self) -> Dtype {
        match self {
            Buffer::Integer(_) => Dtype::Integer,
            Buffer::Float(_) => Dtype::Float,
        }
    }

    pub(crate) fn len(&self) -> usize {
        dispatch!(self, |data| data.len())
    }

    /// Reads position `i`, which must be in bounds.
    pub(crate) fn scalar_at(&self, i: usize) -> Scalar {
        match self {
            Buffer::Integer(data) => Scalar::Int(data[i]),
            Buffer::Float(data) => Scalar::Float(data[i]),
        }
    }

    /// Copies the elements at `positions`, in order.
    pub(crate) fn gather(&self, positions: &[usize]) -> Self {
        match self {
            Buffer::Integer(data) => Buffer::Integer(positions.iter().map(|&i| data[i]).collect()),
            Buffer::Float(data) => Buffer::Float(positions.iter().map(|&i| data[i]).collect()),
        }
    }
}
