use crate::{
    array::{Error, VectoPyArray},
    dtypes::Dtype,
};

impl VectoPyArray {
    /// Copies the elements of an array, converting them to a different dtype.
    ///
    /// Float to integer conversion truncates toward zero, and fails with
    /// [Error::Cast] for values with no integer representation (NaN,
    /// infinities, or values outside the range of `i64`).
    ///
    /// Example usage:
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
    /// let b = a.astype(Dtype::Float).unwrap();
    /// assert_eq!(b.as_f64_slice(), Some(&[1.0, 2.0, 3.0][..]));
    ///
    /// let c = VectoPyArray::from_vec_f64(vec![1.9, -1.9]).astype(Dtype::Integer).unwrap();
    /// assert_eq!(c.as_i64_slice(), Some(&[1, -1][..]));
    /// ```
    pub fn astype(&self, dtype: Dtype) -> Result<Self, Error> {
        Ok(match dtype {
            Dtype::Integer => Self::from_elements(self.elements::<i64>()?.into_owned()),
            Dtype::Float => Self::from_elements(self.elements::<f64>()?.into_owned()),
        })
    }
}
