use super::{Error, VectoPyArray};
use crate::{dtypes::Scalar, shapes::Slice};

impl VectoPyArray {
    /// Returns the raw element at `index`. Negative indices count from the end.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![5, 10, 15]);
    /// assert_eq!(a.get(0).unwrap(), Scalar::Int(5));
    /// assert_eq!(a.get(-1).unwrap(), Scalar::Int(15));
    /// assert!(a.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<Scalar, Error> {
        let len = self.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if resolved < 0 || resolved as usize >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(self.buffer.scalar_at(resolved as usize))
    }

    /// Selects a range of elements into a new array with the same dtype.
    /// The result owns a copy of the selected elements.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![5, 10, 15, 20, 25]);
    /// assert_eq!(a.slice(1..4).unwrap().as_i64_slice(), Some(&[10, 15, 20][..]));
    /// assert_eq!(a.slice(2..).unwrap().as_i64_slice(), Some(&[15, 20, 25][..]));
    /// let reversed = a.slice(Slice::from(..).with_step(-1)).unwrap();
    /// assert_eq!(reversed.as_i64_slice(), Some(&[25, 20, 15, 10, 5][..]));
    /// ```
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Self, Error> {
        let positions = slice.into().indices(self.len())?;
        Ok(Self::from_buffer(self.buffer.gather(&positions)))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_get_out_of_bounds() {
        let a = VectoPyArray::from_vec_f64(vec![1.0, 2.0]);
        assert_eq!(a.get(1), Ok(Scalar::Float(2.0)));
        assert_eq!(a.get(-2), Ok(Scalar::Float(1.0)));
        assert_eq!(
            a.get(-3),
            Err(Error::IndexOutOfBounds { index: -3, len: 2 })
        );
        assert_eq!(a.get(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn test_slice_keeps_dtype() {
        let a = VectoPyArray::from_vec_f64(vec![1.0, 2.0, 3.0]);
        let s = a.slice(..2).unwrap();
        assert_eq!(s.dtype(), Dtype::Float);
        assert_eq!(s.shape(), (2,));
    }

    #[test]
    fn test_slice_copies_storage() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let s = a.slice(..).unwrap();
        assert_eq!(s, a);
        assert_ne!(
            s.as_i64_slice().unwrap().as_ptr(),
            a.as_i64_slice().unwrap().as_ptr()
        );
    }

    #[test]
    fn test_empty_slice() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let s = a.slice(Slice::new(Some(2), Some(1), None)).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.dtype(), Dtype::Integer);
    }

    #[test]
    fn test_slice_zero_step() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        assert_eq!(
            a.slice(Slice::new(None, None, Some(0))),
            Err(Error::InvalidSlice)
        );
    }
}
