//! Reductions over all elements: [VectoPyArray::sum], [VectoPyArray::min],
//! [VectoPyArray::max], [VectoPyArray::mean], [VectoPyArray::var],
//! [VectoPyArray::std], [VectoPyArray::median], and [VectoPyArray::mode].
//!
//! Everything except `sum` fails with [Error::Empty] on an empty array.

mod mode;

pub use mode::Mode;
pub(crate) use mode::frequencies;

use crate::{
    array::{dispatch, Error, VectoPyArray},
    dtypes::{Element, Scalar},
};

impl VectoPyArray {
    /// Sum of all elements. The result has the dtype of the array, and the
    /// sum of an empty array is that dtype's zero.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(a.sum().unwrap(), Scalar::Int(15));
    /// ```
    pub fn sum(&self) -> Result<Scalar, Error> {
        dispatch!(self.buffer(), |data| sum_forward(data).map(Element::into_scalar))
    }

    /// Smallest element, the first one wins on ties.
    pub fn min(&self) -> Result<Scalar, Error> {
        self.non_empty("min")?;
        Ok(dispatch!(self.buffer(), |data| {
            let mut best = data[0];
            for &x in &data[1..] {
                if x < best {
                    best = x;
                }
            }
            best.into_scalar()
        }))
    }

    /// Largest element, the first one wins on ties.
    pub fn max(&self) -> Result<Scalar, Error> {
        self.non_empty("max")?;
        Ok(dispatch!(self.buffer(), |data| {
            let mut best = data[0];
            for &x in &data[1..] {
                if x > best {
                    best = x;
                }
            }
            best.into_scalar()
        }))
    }

    /// Arithmetic mean, always a float. Accumulates in `f64`, so unlike
    /// [VectoPyArray::sum] it never overflows.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![1, 2, 3, 4]);
    /// assert_eq!(a.mean().unwrap(), 2.5);
    /// ```
    pub fn mean(&self) -> Result<f64, Error> {
        self.non_empty("mean")?;
        let total: f64 = self.iter().map(|x| x.to_f64()).sum();
        Ok(total / self.len() as f64)
    }

    /// Population variance: the mean of squared deviations from the mean.
    pub fn var(&self) -> Result<f64, Error> {
        let mean = self.mean()?;
        let squares: f64 = self.iter().map(|x| (x.to_f64() - mean).powi(2)).sum();
        Ok(squares / self.len() as f64)
    }

    /// Population standard deviation (divisor `n`, not `n - 1`).
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![2, 4, 4, 4, 5, 5, 7, 9]);
    /// assert_eq!(a.std().unwrap(), 2.0);
    /// ```
    pub fn std(&self) -> Result<f64, Error> {
        Ok(self.var()?.sqrt())
    }

    /// Middle element of a sorted copy. With an even number of elements the
    /// two middle elements are averaged, which always gives a float.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let odd = VectoPyArray::from_vec_i64(vec![3, 1, 2]);
    /// assert_eq!(odd.median().unwrap(), Scalar::Int(2));
    /// let even = VectoPyArray::from_vec_i64(vec![4, 1, 3, 2]);
    /// assert_eq!(even.median().unwrap(), Scalar::Float(2.5));
    /// ```
    pub fn median(&self) -> Result<Scalar, Error> {
        self.non_empty("median")?;
        Ok(dispatch!(self.buffer(), |data| {
            let mut sorted = data.clone();
            sorted.sort_by(Element::total_cmp);
            let n = sorted.len();
            if n % 2 == 1 {
                sorted[n / 2].into_scalar()
            } else {
                let lo = sorted[n / 2 - 1].to_f64_lossy();
                let hi = sorted[n / 2].to_f64_lossy();
                Scalar::Float((lo + hi) / 2.0)
            }
        }))
    }

    pub(crate) fn non_empty(&self, op: &'static str) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::Empty { op });
        }
        Ok(())
    }
}

pub(crate) fn sum_forward<E: Element>(data: &[E]) -> Result<E, Error> {
    data.iter().try_fold(E::zero(), |acc, &x| acc.try_add(x))
}
