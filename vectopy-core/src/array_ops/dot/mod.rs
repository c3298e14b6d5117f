use crate::{
    array::{Error, VectoPyArray},
    dtypes::{Dtype, Element, Scalar},
    shapes::check_same_shape,
};

/// The sum of the pairwise products of two arrays of the same shape.
///
/// The result is a float when either array is a float array.
///
/// Example:
/// ```rust
/// # use vectopy_core::prelude::*;
/// let a = VectoPyArray::from_vec_i64(vec![10, 20, 30]);
/// let b = VectoPyArray::from_vec_i64(vec![2, 4, 5]);
/// assert_eq!(a.dot(&b).unwrap(), Scalar::Int(250));
///
/// let c = VectoPyArray::from_vec_i64(vec![1, 2]);
/// assert!(matches!(a.dot(&c), Err(Error::Shape { .. })));
/// ```
pub fn dot(lhs: &VectoPyArray, rhs: &VectoPyArray) -> Result<Scalar, Error> {
    lhs.dot(rhs)
}

impl VectoPyArray {
    /// See [dot]
    pub fn dot(&self, rhs: &VectoPyArray) -> Result<Scalar, Error> {
        check_same_shape(self.shape(), rhs.shape())?;
        match self.dtype().promote(rhs.dtype()) {
            Dtype::Integer => dot_forward::<i64>(self, rhs),
            Dtype::Float => dot_forward::<f64>(self, rhs),
        }
    }
}

fn dot_forward<E: Element>(lhs: &VectoPyArray, rhs: &VectoPyArray) -> Result<Scalar, Error> {
    let lhs = lhs.elements::<E>()?;
    let rhs = rhs.elements::<E>()?;
    lhs.iter()
        .zip(rhs.iter())
        .try_fold(E::zero(), |acc, (&x, &y)| acc.try_add(x.try_mul(y)?))
        .map(Element::into_scalar)
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::*};

    #[test]
    fn test_dot_int() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let b = VectoPyArray::from_vec_i64(vec![4, 5, 6]);
        assert_eq!(a.dot(&b), Ok(Scalar::Int(32)));
    }

    #[test]
    fn test_dot_mixed_is_float() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let b = VectoPyArray::from_vec_f64(vec![0.5, 0.5, 0.5]);
        let r = a.dot(&b).unwrap();
        assert_eq!(r.dtype(), Dtype::Float);
        assert_close!(r.to_f64(), 3.0);
    }

    #[test]
    fn test_dot_shape_mismatch() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let b = VectoPyArray::from_vec_i64(vec![1, 2]);
        assert_eq!(a.dot(&b), Err(Error::Shape { lhs: (3,), rhs: (2,) }));
    }

    #[test]
    fn test_dot_empty_is_zero() {
        let a = VectoPyArray::zeros(0, Dtype::Integer);
        assert_eq!(a.dot(&a), Ok(Scalar::Int(0)));
    }
}
