use super::statistics::frequencies;
use crate::{
    array::{dispatch, Error, VectoPyArray},
    dtypes::{Element, Scalar},
};

/// Boyer-Moore vote: the only value that can possibly be a majority.
fn majority_candidate<E: Element>(data: &[E]) -> Option<E> {
    let mut candidate = None;
    let mut count = 0usize;
    for &x in data {
        if count == 0 {
            candidate = Some(x);
            count = 1;
        } else if candidate == Some(x) {
            count += 1;
        } else {
            count -= 1;
        }
    }
    candidate
}

fn majority_forward<E: Element>(data: &[E]) -> Result<Scalar, Error> {
    let candidate = majority_candidate(data).ok_or(Error::Empty { op: "majority element" })?;
    let occurrences = data.iter().filter(|&&x| x == candidate).count();
    if occurrences > data.len() / 2 {
        Ok(candidate.into_scalar())
    } else {
        Err(Error::NoMajority)
    }
}

impl VectoPyArray {
    /// The element occurring in more than half of the positions, found with
    /// the Boyer-Moore voting algorithm in a single pass, then verified by
    /// an exact count.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![2, 2, 3, 2, 4, 2, 2]);
    /// assert_eq!(a.majority_element().unwrap(), Scalar::Int(2));
    ///
    /// let b = VectoPyArray::from_vec_i64(vec![1, 2, 3, 1, 2, 3]);
    /// assert_eq!(b.majority_element(), Err(Error::NoMajority));
    /// ```
    pub fn majority_element(&self) -> Result<Scalar, Error> {
        dispatch!(self.buffer(), |data| majority_forward(data))
    }

    /// Each distinct element exactly once, in order of first occurrence.
    pub fn unique(&self) -> Self {
        dispatch!(self.buffer(), |data| {
            let distinct = frequencies(data).into_values().map(|(x, _)| x).collect();
            Self::from_elements(distinct)
        })
    }

    /// Whether the elements are entirely non-decreasing or entirely
    /// non-increasing. Ties are allowed in both directions.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// assert!(VectoPyArray::from_vec_i64(vec![7, 7, 7]).is_monotonic());
    /// assert!(!VectoPyArray::from_vec_i64(vec![1, 3, 2, 4]).is_monotonic());
    /// ```
    pub fn is_monotonic(&self) -> bool {
        dispatch!(self.buffer(), |data| {
            let increasing = data.windows(2).all(|w| w[0] <= w[1]);
            let decreasing = data.windows(2).all(|w| w[0] >= w[1]);
            increasing || decreasing
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_majority_element() {
        let a = VectoPyArray::from_vec_i64(vec![3, 3, 4, 2, 4, 4, 2, 4, 4]);
        assert_eq!(a.majority_element(), Ok(Scalar::Int(4)));
        let a = VectoPyArray::from_vec_f64(vec![1.5, 1.5, 2.5]);
        assert_eq!(a.majority_element(), Ok(Scalar::Float(1.5)));
        let a = VectoPyArray::from_vec_i64(vec![9]);
        assert_eq!(a.majority_element(), Ok(Scalar::Int(9)));
    }

    #[test]
    fn test_exactly_half_is_not_a_majority() {
        let a = VectoPyArray::from_vec_i64(vec![1, 1, 2, 2]);
        assert_eq!(a.majority_element(), Err(Error::NoMajority));
    }

    #[test]
    fn test_majority_empty() {
        let a = VectoPyArray::zeros(0, Dtype::Integer);
        assert!(matches!(a.majority_element(), Err(Error::Empty { .. })));
    }

    #[test]
    fn test_unique() {
        let a = VectoPyArray::from_vec_i64(vec![3, 1, 3, 2, 1]);
        let u = a.unique();
        assert_eq!(u.dtype(), Dtype::Integer);
        let mut values = u.as_i64_slice().unwrap().to_vec();
        values.sort();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_unique_keeps_float_dtype() {
        let a = VectoPyArray::from_vec_f64(vec![1.0, 1.0]);
        assert_eq!(a.unique(), VectoPyArray::from_vec_f64(vec![1.0]));
    }

    #[test]
    fn test_is_monotonic() {
        assert!(VectoPyArray::from_vec_i64(vec![1, 2, 3, 4, 5]).is_monotonic());
        assert!(VectoPyArray::from_vec_i64(vec![5, 4, 3, 2, 1]).is_monotonic());
        assert!(VectoPyArray::from_vec_f64(vec![1.0, 1.0, 2.0]).is_monotonic());
        assert!(!VectoPyArray::from_vec_f64(vec![1.0, 0.5, 2.0]).is_monotonic());
    }

    #[test]
    fn test_short_arrays_are_monotonic() {
        assert!(VectoPyArray::zeros(0, Dtype::Float).is_monotonic());
        assert!(VectoPyArray::from_vec_i64(vec![42]).is_monotonic());
    }
}
