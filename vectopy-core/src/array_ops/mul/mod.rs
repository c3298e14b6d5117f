use super::utilities::{BinaryKernelOp, TryIntoOperand};
use crate::{
    array::{Error, VectoPyArray},
    dtypes::Element,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryMulKernelOp;

impl BinaryKernelOp for BinaryMulKernelOp {
    fn f<E: Element>(&self, x: E, y: E) -> Result<E, Error> {
        x.try_mul(y)
    }
}

/// Element wise and scalar multiplication.
///
/// Example:
/// ```rust
/// # use vectopy_core::prelude::*;
/// let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
/// let r = &a * 2;
/// assert_eq!(r.as_i64_slice(), Some(&[20, 40, 60][..]));
/// ```
pub fn mul<'a>(lhs: &VectoPyArray, rhs: impl TryIntoOperand<'a>) -> Result<VectoPyArray, Error> {
    lhs.try_mul(rhs)
}

/// Fallible version of [std::ops::Mul]. See [mul]
pub trait TryMul<Rhs> {
    fn try_mul(&self, rhs: Rhs) -> Result<VectoPyArray, Error>;
}

impl<'a, Rhs: TryIntoOperand<'a>> TryMul<Rhs> for VectoPyArray {
    /// See [mul]
    fn try_mul(&self, rhs: Rhs) -> Result<VectoPyArray, Error> {
        self.try_elementwise(rhs, BinaryMulKernelOp)
    }
}

impl<'a, Rhs: TryIntoOperand<'a>> std::ops::Mul<Rhs> for VectoPyArray {
    type Output = VectoPyArray;
    /// See [mul]
    fn mul(self, rhs: Rhs) -> Self::Output {
        self.try_mul(rhs).unwrap()
    }
}

impl<'a, 'b, Rhs: TryIntoOperand<'a>> std::ops::Mul<Rhs> for &'b VectoPyArray {
    type Output = VectoPyArray;
    /// See [mul]
    fn mul(self, rhs: Rhs) -> Self::Output {
        self.try_mul(rhs).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::*};

    #[test]
    fn test_mul_1d() {
        let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
        let b = VectoPyArray::from_vec_i64(vec![2, 4, 5]);
        assert_eq!(&a * &b, VectoPyArray::from_vec_i64(vec![20, 80, 150]));
    }

    #[test]
    fn test_scalar_mul_float() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let r = &a * 0.5;
        assert_eq!(r.dtype(), Dtype::Float);
        assert_close_to_literal!(r, [0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_mul_matches_pairwise_definition() {
        let a = VectoPyArray::from_vec_f64(vec![0.6570, 0.1708, 0.1500]);
        let b = VectoPyArray::from_vec_f64(vec![0.5199, 0.3844, 0.3759]);
        let r = &a * &b;
        for i in 0..3 {
            let expected = a.get(i).unwrap().to_f64() * b.get(i).unwrap().to_f64();
            assert_eq!(r.get(i).unwrap(), Scalar::Float(expected));
        }
    }

    #[test]
    fn test_mul_overflow() {
        let a = VectoPyArray::from_vec_i64(vec![i64::MAX / 2 + 1]);
        assert!(matches!(a.try_mul(2), Err(Error::Overflow { .. })));
    }
}
