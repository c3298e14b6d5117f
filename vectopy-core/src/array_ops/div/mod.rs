use super::utilities::{BinaryKernelOp, TryIntoOperand};
use crate::{
    array::{Error, VectoPyArray},
    dtypes::{Dtype, Element},
};

/// True division, the result is always [Dtype::Float].
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryDivKernelOp;

impl BinaryKernelOp for BinaryDivKernelOp {
    fn output_dtype(&self, _: Dtype, _: Dtype) -> Dtype {
        Dtype::Float
    }

    fn f<E: Element>(&self, x: E, y: E) -> Result<E, Error> {
        x.try_div(y)
    }
}

/// Element wise and scalar true division.
///
/// Unlike the other arithmetic operators the result is always a float
/// array, even when both operands are integer arrays.
///
/// Example:
/// ```rust
/// # use vectopy_core::prelude::*;
/// let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
/// let b = VectoPyArray::from_vec_i64(vec![2, 4, 5]);
/// let r = &a / &b;
/// assert_eq!(r.as_f64_slice(), Some(&[5.0, 5.0, 6.0][..]));
/// ```
///
/// Dividing by zero is an error:
/// ```rust
/// # use vectopy_core::prelude::*;
/// let a = VectoPyArray::from_vec_i64(vec![1, 2]);
/// assert_eq!(a.try_div(0), Err(Error::DivisionByZero));
/// ```
pub fn div<'a>(lhs: &VectoPyArray, rhs: impl TryIntoOperand<'a>) -> Result<VectoPyArray, Error> {
    lhs.try_div(rhs)
}

/// Fallible version of [std::ops::Div]. See [div]
pub trait TryDiv<Rhs> {
    fn try_div(&self, rhs: Rhs) -> Result<VectoPyArray, Error>;
}

impl<'a, Rhs: TryIntoOperand<'a>> TryDiv<Rhs> for VectoPyArray {
    /// See [div]
    fn try_div(&self, rhs: Rhs) -> Result<VectoPyArray, Error> {
        self.try_elementwise(rhs, BinaryDivKernelOp)
    }
}

impl<'a, Rhs: TryIntoOperand<'a>> std::ops::Div<Rhs> for VectoPyArray {
    type Output = VectoPyArray;
    /// See [div]
    fn div(self, rhs: Rhs) -> Self::Output {
        self.try_div(rhs).unwrap()
    }
}

impl<'a, 'b, Rhs: TryIntoOperand<'a>> std::ops::Div<Rhs> for &'b VectoPyArray {
    type Output = VectoPyArray;
    /// See [div]
    fn div(self, rhs: Rhs) -> Self::Output {
        self.try_div(rhs).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::*};

    #[test]
    fn test_int_div_int_is_float() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let b = VectoPyArray::from_vec_i64(vec![2, 2, 2]);
        let r = &a / &b;
        assert_eq!(r.dtype(), Dtype::Float);
        assert_close_to_literal!(r, [0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_scalar_div() {
        let a = VectoPyArray::from_vec_f64(vec![1.0, 3.0]);
        assert_close_to_literal!(&a / 4, [0.25, 0.75]);
        assert_close_to_literal!(a / 0.5, [2.0, 6.0]);
    }

    #[test]
    fn test_div_by_zero_element() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2]);
        let b = VectoPyArray::from_vec_i64(vec![1, 0]);
        assert_eq!(a.try_div(&b), Err(Error::DivisionByZero));
        assert_eq!(a.try_div(0.0), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_div_type_mismatch() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2]);
        assert_eq!(a.try_div('x'), Err(Error::TypeMismatch { operand: "char" }));
    }
}
