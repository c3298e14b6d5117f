use super::{Dtype, Element};
use crate::array::Error;

/// A single raw element of an array.
///
/// Indexing and reductions hand elements out as a [Scalar], and scalars are
/// accepted as the right hand side of arithmetic.
///
/// Note that `Scalar::Int(1) != Scalar::Float(1.0)`, the variant is part of
/// the value just like the dtype is part of an array.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub const fn dtype(&self) -> Dtype {
        match self {
            Scalar::Int(_) => Dtype::Integer,
            Scalar::Float(_) => Dtype::Float,
        }
    }

    /// Widens the value to `f64`.
    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }

    /// Returns the value if this is [Scalar::Int].
    pub const fn as_i64(self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(v),
            Scalar::Float(_) => None,
        }
    }

    /// Returns the value if this is [Scalar::Float].
    pub const fn as_f64(self) -> Option<f64> {
        match self {
            Scalar::Int(_) => None,
            Scalar::Float(v) => Some(v),
        }
    }

    /// Converts the value to `dtype`. Float to integer truncates toward zero,
    /// and fails for values that have no integer representation.
    ///
    /// ```rust
    /// # use vectopy_core::dtypes::{Dtype, Scalar};
    /// assert_eq!(Scalar::Float(2.7).cast(Dtype::Integer).unwrap(), Scalar::Int(2));
    /// assert_eq!(Scalar::Int(3).cast(Dtype::Float).unwrap(), Scalar::Float(3.0));
    /// assert!(Scalar::Float(f64::NAN).cast(Dtype::Integer).is_err());
    /// ```
    pub fn cast(self, dtype: Dtype) -> Result<Scalar, Error> {
        match dtype {
            Dtype::Integer => i64::from_scalar(self).map(Scalar::Int),
            Dtype::Float => f64::from_scalar(self).map(Scalar::Float),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident, $inner:ty, [$($type:ty),*]) => {
        $(
            impl From<$type> for Scalar {
                fn from(value: $type) -> Self {
                    Scalar::$variant(<$inner>::from(value))
                }
            }
        )*
    };
}

scalar_from!(Int, i64, [i64, i32, i16, i8, u32, u16, u8]);
scalar_from!(Float, f64, [f64, f32]);

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            // `{:?}` keeps the decimal point on integral floats, e.g. `1.0`
            Scalar::Float(v) => write!(f, "{v:?}"),
        }
    }
}
