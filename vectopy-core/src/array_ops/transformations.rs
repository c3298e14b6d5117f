use crate::{
    array::{dispatch, Buffer, Error, VectoPyArray},
    dtypes::Scalar,
};

impl VectoPyArray {
    /// Standardizes to zero mean and unit (population) standard deviation,
    /// `(x - mean) / std`. A constant array normalizes to all zeros.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![2, 4, 4, 4, 5, 5, 7, 9]);
    /// let z = a.normalize().unwrap();
    /// assert_eq!(z.dtype(), Dtype::Float);
    /// assert!(z.mean().unwrap().abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Result<Self, Error> {
        if self.len() < 2 {
            return Err(Error::Domain(
                "Normalization requires at least two elements.",
            ));
        }
        let mean = self.mean()?;
        let std = self.std()?;
        let data = self.to_f64_vec();
        if std == 0.0 {
            return Ok(Self::from_vec_f64(vec![0.0; data.len()]));
        }
        Ok(Self::from_vec_f64(
            data.into_iter().map(|x| (x - mean) / std).collect(),
        ))
    }

    /// Clamps every element into `[lo, hi]`, keeping the dtype.
    ///
    /// Each element becomes `max(lo, min(x, hi))`, so when `lo > hi` every
    /// element is `lo`. On an integer array fractional bounds are rounded
    /// inward, so `clip(0.5, 9.5)` behaves like `clip(1, 9)`. A NaN bound is
    /// an error.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![-5, 0, 50, 100, 150]);
    /// let r = a.clip(0, 100).unwrap();
    /// assert_eq!(r.as_i64_slice(), Some(&[0, 0, 50, 100, 100][..]));
    /// ```
    pub fn clip(&self, lo: impl Into<Scalar>, hi: impl Into<Scalar>) -> Result<Self, Error> {
        let (lo, hi) = (lo.into(), hi.into());
        if lo.to_f64().is_nan() || hi.to_f64().is_nan() {
            return Err(Error::Domain("clip: bound is NaN"));
        }
        Ok(match self.buffer() {
            Buffer::Integer(data) => {
                let (lo, hi) = integer_bounds(lo, hi);
                Self::from_vec_i64(data.iter().map(|&x| x.min(hi).max(lo)).collect())
            }
            Buffer::Float(data) => {
                let (lo, hi) = (lo.to_f64(), hi.to_f64());
                Self::from_vec_f64(data.iter().map(|&x| x.min(hi).max(lo)).collect())
            }
        })
    }

    /// A copy with the elements in reverse order.
    pub fn reverse(&self) -> Self {
        dispatch!(self.buffer(), |data| {
            Self::from_elements(data.iter().rev().copied().collect())
        })
    }

    /// Rescales linearly onto `[0, 1]`, `(x - min) / (max - min)`.
    /// A constant array maps to all `0.5`.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![10, 20, 30, 40, 50]);
    /// let r = a.minmax_scale().unwrap();
    /// assert_eq!(r.as_f64_slice(), Some(&[0.0, 0.25, 0.5, 0.75, 1.0][..]));
    /// ```
    pub fn minmax_scale(&self) -> Result<Self, Error> {
        self.non_empty("minmax_scale")?;
        let lo = self.min()?.to_f64();
        let hi = self.max()?.to_f64();
        let data = self.to_f64_vec();
        let range = hi - lo;
        if range == 0.0 {
            return Ok(Self::from_vec_f64(vec![0.5; data.len()]));
        }
        Ok(Self::from_vec_f64(
            data.into_iter().map(|x| (x - lo) / range).collect(),
        ))
    }
}

/// Rounds non-NaN float bounds inward onto the integers.
fn integer_bounds(lo: Scalar, hi: Scalar) -> (i64, i64) {
    let lo = match lo {
        Scalar::Int(v) => v,
        Scalar::Float(v) => v.ceil() as i64,
    };
    let hi = match hi {
        Scalar::Int(v) => v,
        Scalar::Float(v) => v.floor() as i64,
    };
    (lo, hi)
}
