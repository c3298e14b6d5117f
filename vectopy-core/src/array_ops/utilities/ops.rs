use std::borrow::Cow;

use crate::{
    array::{Error, VectoPyArray},
    dtypes::{Dtype, Element, Scalar},
    shapes::check_same_shape,
};

/// A binary operation that can be applied elementwise by
/// [VectoPyArray::try_elementwise].
pub trait BinaryKernelOp: std::fmt::Debug + Copy {
    /// Dtype of the result, given the dtypes of both operands. Defaults to
    /// [Dtype::promote].
    fn output_dtype(&self, lhs: Dtype, rhs: Dtype) -> Dtype {
        lhs.promote(rhs)
    }

    fn f<E: Element>(&self, x: E, y: E) -> Result<E, Error>;
}

/// The right hand side of an elementwise operation.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Scalar(Scalar),
    Array(Cow<'a, VectoPyArray>),
}

/// Conversion into an [Operand]. Numbers and arrays convert, anything else
/// fails with [Error::TypeMismatch].
pub trait TryIntoOperand<'a> {
    fn try_into_operand(self) -> Result<Operand<'a>, Error>;
}

macro_rules! scalar_operand {
    ($($type:ty),*) => {
        $(
            impl<'a> TryIntoOperand<'a> for $type {
                fn try_into_operand(self) -> Result<Operand<'a>, Error> {
                    Ok(Operand::Scalar(self.into()))
                }
            }
        )*
    };
}

scalar_operand!(Scalar, i64, i32, f64, f32);

macro_rules! unsupported_operand {
    ($($type:ty => $name:literal),*) => {
        $(
            impl<'a> TryIntoOperand<'a> for $type {
                fn try_into_operand(self) -> Result<Operand<'a>, Error> {
                    Err(Error::TypeMismatch { operand: $name })
                }
            }
        )*
    };
}

unsupported_operand!(bool => "bool", char => "char", &str => "str", String => "String");

impl<'a> TryIntoOperand<'a> for &'a VectoPyArray {
    fn try_into_operand(self) -> Result<Operand<'a>, Error> {
        Ok(Operand::Array(Cow::Borrowed(self)))
    }
}

impl<'a> TryIntoOperand<'a> for VectoPyArray {
    fn try_into_operand(self) -> Result<Operand<'a>, Error> {
        Ok(Operand::Array(Cow::Owned(self)))
    }
}

impl VectoPyArray {
    /// Applies `op` between every element of `self` and `rhs`.
    ///
    /// - a scalar `rhs` is paired with every element.
    /// - an array `rhs` must have the same shape, and is paired positionally.
    ///
    /// The result dtype is chosen by [BinaryKernelOp::output_dtype], both
    /// operands are converted to it before `op` runs.
    pub fn try_elementwise<'a, Op: BinaryKernelOp>(
        &self,
        rhs: impl TryIntoOperand<'a>,
        op: Op,
    ) -> Result<Self, Error> {
        match rhs.try_into_operand()? {
            Operand::Scalar(rhs) => match op.output_dtype(self.dtype(), rhs.dtype()) {
                Dtype::Integer => scalar_forward::<i64, _>(op, self, rhs),
                Dtype::Float => scalar_forward::<f64, _>(op, self, rhs),
            },
            Operand::Array(rhs) => {
                check_same_shape(self.shape(), rhs.shape())?;
                match op.output_dtype(self.dtype(), rhs.dtype()) {
                    Dtype::Integer => binary_forward::<i64, _>(op, self, &rhs),
                    Dtype::Float => binary_forward::<f64, _>(op, self, &rhs),
                }
            }
        }
    }
}

fn scalar_forward<E: Element, Op: BinaryKernelOp>(
    op: Op,
    lhs: &VectoPyArray,
    rhs: Scalar,
) -> Result<VectoPyArray, Error> {
    let lhs = lhs.elements::<E>()?;
    let rhs = E::from_scalar(rhs)?;
    let data = lhs
        .iter()
        .map(|&x| op.f(x, rhs))
        .collect::<Result<Vec<E>, _>>()?;
    Ok(VectoPyArray::from_elements(data))
}

fn binary_forward<E: Element, Op: BinaryKernelOp>(
    op: Op,
    lhs: &VectoPyArray,
    rhs: &VectoPyArray,
) -> Result<VectoPyArray, Error> {
    let lhs = lhs.elements::<E>()?;
    let rhs = rhs.elements::<E>()?;
    let data = lhs
        .iter()
        .zip(rhs.iter())
        .map(|(&x, &y)| op.f(x, y))
        .collect::<Result<Vec<E>, _>>()?;
    Ok(VectoPyArray::from_elements(data))
}
