use super::utilities::{BinaryKernelOp, TryIntoOperand};
use crate::{
    array::{Error, VectoPyArray},
    dtypes::Element,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryAddKernelOp;

impl BinaryKernelOp for BinaryAddKernelOp {
    fn f<E: Element>(&self, x: E, y: E) -> Result<E, Error> {
        x.try_add(y)
    }
}

/// Element wise and scalar addition.
///
/// Example:
/// ```rust
/// # use vectopy_core::prelude::*;
/// let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
/// let b = VectoPyArray::from_vec_i64(vec![2, 4, 5]);
/// let r = &a + &b;
/// assert_eq!(r.as_i64_slice(), Some(&[12, 24, 35][..]));
/// ```
///
/// Adding a scalar:
/// ```rust
/// # use vectopy_core::prelude::*;
/// let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
/// let r = a + 0.5;
/// assert_eq!(r.as_f64_slice(), Some(&[10.5, 20.5, 30.5][..]));
/// ```
pub fn add<'a>(lhs: &VectoPyArray, rhs: impl TryIntoOperand<'a>) -> Result<VectoPyArray, Error> {
    lhs.try_add(rhs)
}

/// Fallible version of [std::ops::Add]. See [add]
pub trait TryAdd<Rhs> {
    fn try_add(&self, rhs: Rhs) -> Result<VectoPyArray, Error>;
}

impl<'a, Rhs: TryIntoOperand<'a>> TryAdd<Rhs> for VectoPyArray {
    /// See [add]
    fn try_add(&self, rhs: Rhs) -> Result<VectoPyArray, Error> {
        self.try_elementwise(rhs, BinaryAddKernelOp)
    }
}

impl<'a, Rhs: TryIntoOperand<'a>> std::ops::Add<Rhs> for VectoPyArray {
    type Output = VectoPyArray;
    /// See [add]
    ///
    /// # Panics
    /// On any error [TryAdd::try_add] would return.
    fn add(self, rhs: Rhs) -> Self::Output {
        self.try_add(rhs).unwrap()
    }
}

impl<'a, 'b, Rhs: TryIntoOperand<'a>> std::ops::Add<Rhs> for &'b VectoPyArray {
    type Output = VectoPyArray;
    /// See [add]
    fn add(self, rhs: Rhs) -> Self::Output {
        self.try_add(rhs).unwrap()
    }
}
