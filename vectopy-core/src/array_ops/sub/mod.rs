use super::utilities::{BinaryKernelOp, TryIntoOperand};
use crate::{
    array::{Error, VectoPyArray},
    dtypes::Element,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySubKernelOp;

impl BinaryKernelOp for BinarySubKernelOp {
    fn f<E: Element>(&self, x: E, y: E) -> Result<E, Error> {
        x.try_sub(y)
    }
}

/// Element wise and scalar subtraction.
///
/// Example:
/// ```rust
/// # use vectopy_core::prelude::*;
/// let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
/// let b = VectoPyArray::from_vec_i64(vec![2, 4, 5]);
/// let r = &a - &b;
/// assert_eq!(r.as_i64_slice(), Some(&[8, 16, 25][..]));
/// ```
pub fn sub<'a>(lhs: &VectoPyArray, rhs: impl TryIntoOperand<'a>) -> Result<VectoPyArray, Error> {
    lhs.try_sub(rhs)
}

/// Fallible version of [std::ops::Sub]. See [sub]
pub trait TrySub<Rhs> {
    fn try_sub(&self, rhs: Rhs) -> Result<VectoPyArray, Error>;
}

impl<'a, Rhs: TryIntoOperand<'a>> TrySub<Rhs> for VectoPyArray {
    /// See [sub]
    fn try_sub(&self, rhs: Rhs) -> Result<VectoPyArray, Error> {
        self.try_elementwise(rhs, BinarySubKernelOp)
    }
}

impl<'a, Rhs: TryIntoOperand<'a>> std::ops::Sub<Rhs> for VectoPyArray {
    type Output = VectoPyArray;
    /// See [sub]
    fn sub(self, rhs: Rhs) -> Self::Output {
        self.try_sub(rhs).unwrap()
    }
}

impl<'a, 'b, Rhs: TryIntoOperand<'a>> std::ops::Sub<Rhs> for &'b VectoPyArray {
    type Output = VectoPyArray;
    /// See [sub]
    fn sub(self, rhs: Rhs) -> Self::Output {
        self.try_sub(rhs).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::*};

    #[test]
    fn test_sub_1d() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let b = VectoPyArray::from_vec_i64(vec![3, 2, 1]);
        assert_eq!(&a - &b, VectoPyArray::from_vec_i64(vec![-2, 0, 2]));
    }

    #[test]
    fn test_sub_mixed_dtypes() {
        let a = VectoPyArray::from_vec_f64(vec![1.5, 2.5]);
        let b = VectoPyArray::from_vec_i64(vec![1, 1]);
        let r = &a - &b;
        assert_eq!(r.dtype(), Dtype::Float);
        assert_close_to_literal!(r, [0.5, 1.5]);
    }

    #[test]
    fn test_scalar_sub() {
        let a = VectoPyArray::from_vec_i64(vec![5, 6]);
        assert_eq!(a - 5, VectoPyArray::from_vec_i64(vec![0, 1]));
    }

    #[test]
    fn test_sub_overflow() {
        let a = VectoPyArray::from_vec_i64(vec![i64::MIN]);
        assert_eq!(a.try_sub(1), Err(Error::Overflow { op: "subtraction" }));
    }
}
