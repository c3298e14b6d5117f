use std::borrow::Cow;

use num_traits::{NumCast, ToPrimitive, Zero};

use super::{Dtype, Scalar};
use crate::array::{Buffer, Error};

/// Represents a backing element type of an array that can have arithmetic
/// applied to it. Implemented for `i64` ([Dtype::Integer]) and `f64`
/// ([Dtype::Float]).
///
/// The arithmetic methods are checked: integer overflow and division by
/// zero are reported as [Error]s instead of wrapping or producing
/// infinities.
pub trait Element:
    'static
    + Copy
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Zero
    + NumCast
    + ToPrimitive
{
    const DTYPE: Dtype;

    fn into_scalar(self) -> Scalar;

    /// Converts `value` into this element type.
    fn from_scalar(value: Scalar) -> Result<Self, Error>;

    /// Views `buffer` as a slice of this element type, converting it if the
    /// buffer holds the other dtype.
    fn from_buffer(buffer: &Buffer) -> Result<Cow<'_, [Self]>, Error>;

    fn into_buffer(data: Vec<Self>) -> Buffer;

    fn try_add(self, rhs: Self) -> Result<Self, Error>;
    fn try_sub(self, rhs: Self) -> Result<Self, Error>;
    fn try_mul(self, rhs: Self) -> Result<Self, Error>;
    /// Integer division truncates. Arrays never reach it through `/`,
    /// true division promotes to [Dtype::Float] first.
    fn try_div(self, rhs: Self) -> Result<Self, Error>;

    /// A hashable identity for frequency tables. Equal values share a key.
    fn key(self) -> u64;

    /// A total order, used for sorting.
    fn total_cmp(&self, other: &Self) -> std::cmp::Ordering;

    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Element for i64 {
    const DTYPE: Dtype = Dtype::Integer;

    fn into_scalar(self) -> Scalar {
        Scalar::Int(self)
    }

    fn from_scalar(value: Scalar) -> Result<Self, Error> {
        match value {
            Scalar::Int(v) => Ok(v),
            Scalar::Float(v) => {
                let cast = if v.is_finite() {
                    <i64 as NumCast>::from(v.trunc())
                } else {
                    None
                };
                cast.ok_or(Error::Cast {
                    value: v,
                    dtype: Dtype::Integer,
                })
            }
        }
    }

    fn from_buffer(buffer: &Buffer) -> Result<Cow<'_, [Self]>, Error> {
        match buffer {
            Buffer::Integer(data) => Ok(Cow::Borrowed(data)),
            Buffer::Float(data) => data
                .iter()
                .map(|&x| Self::from_scalar(Scalar::Float(x)))
                .collect::<Result<Vec<_>, _>>()
                .map(Cow::Owned),
        }
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::Integer(data)
    }

    fn try_add(self, rhs: Self) -> Result<Self, Error> {
        self.checked_add(rhs).ok_or(Error::Overflow { op: "addition" })
    }

    fn try_sub(self, rhs: Self) -> Result<Self, Error> {
        self.checked_sub(rhs)
            .ok_or(Error::Overflow { op: "subtraction" })
    }

    fn try_mul(self, rhs: Self) -> Result<Self, Error> {
        self.checked_mul(rhs)
            .ok_or(Error::Overflow { op: "multiplication" })
    }

    fn try_div(self, rhs: Self) -> Result<Self, Error> {
        if rhs == 0 {
            return Err(Error::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(Error::Overflow { op: "division" })
    }

    fn key(self) -> u64 {
        self as u64
    }

    fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cmp(other)
    }
}

impl Element for f64 {
    const DTYPE: Dtype = Dtype::Float;

    fn into_scalar(self) -> Scalar {
        Scalar::Float(self)
    }

    fn from_scalar(value: Scalar) -> Result<Self, Error> {
        Ok(value.to_f64())
    }

    fn from_buffer(buffer: &Buffer) -> Result<Cow<'_, [Self]>, Error> {
        match buffer {
            Buffer::Integer(data) => Ok(Cow::Owned(data.iter().map(|&x| x as f64).collect())),
            Buffer::Float(data) => Ok(Cow::Borrowed(data)),
        }
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::Float(data)
    }

    fn try_add(self, rhs: Self) -> Result<Self, Error> {
        Ok(self + rhs)
    }

    fn try_sub(self, rhs: Self) -> Result<Self, Error> {
        Ok(self - rhs)
    }

    fn try_mul(self, rhs: Self) -> Result<Self, Error> {
        Ok(self * rhs)
    }

    fn try_div(self, rhs: Self) -> Result<Self, Error> {
        if rhs == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self / rhs)
    }

    fn key(self) -> u64 {
        // -0.0 == 0.0, and every NaN counts as the same value
        if self == 0.0 {
            0.0f64.to_bits()
        } else if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }

    fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        f64::total_cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_overflow_is_an_error() {
        assert_eq!(
            i64::MAX.try_add(1),
            Err(Error::Overflow { op: "addition" })
        );
        assert_eq!(
            i64::MIN.try_sub(1),
            Err(Error::Overflow { op: "subtraction" })
        );
        assert!(i64::MAX.try_mul(2).is_err());
        assert_eq!(2i64.try_mul(21), Ok(42));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(1i64.try_div(0), Err(Error::DivisionByZero));
        assert_eq!(1.0f64.try_div(0.0), Err(Error::DivisionByZero));
        assert_eq!(7i64.try_div(2), Ok(3));
        assert_eq!(7.0f64.try_div(2.0), Ok(3.5));
    }

    #[test]
    fn test_float_keys() {
        assert_eq!((-0.0f64).key(), 0.0f64.key());
        assert_eq!(f64::NAN.key(), (-f64::NAN).key());
        assert_ne!(1.0f64.key(), 2.0f64.key());
    }

    #[test]
    fn test_from_buffer_borrows_same_dtype() {
        let buffer = Buffer::Integer(vec![1, 2, 3]);
        assert!(matches!(i64::from_buffer(&buffer), Ok(Cow::Borrowed(_))));
        let widened = f64::from_buffer(&buffer).unwrap();
        assert_eq!(widened.as_ref(), &[1.0, 2.0, 3.0]);
    }
}
