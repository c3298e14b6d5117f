use crate::{
    array::{dispatch, Error, VectoPyArray},
    dtypes::Element,
};

impl VectoPyArray {
    /// Average of every contiguous window of `window` elements, in order.
    /// Produces `n - window + 1` floats.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let prices = VectoPyArray::from_vec_i64(vec![100, 105, 110, 115, 120, 125]);
    /// let ma = prices.moving_average(3).unwrap();
    /// assert_eq!(ma.as_f64_slice(), Some(&[105.0, 110.0, 115.0, 120.0][..]));
    /// ```
    pub fn moving_average(&self, window: isize) -> Result<Self, Error> {
        if window <= 0 {
            return Err(Error::Domain("Window size must be positive."));
        }
        let window = window as usize;
        if window > self.len() {
            return Err(Error::Domain(
                "Window size cannot be larger than array size.",
            ));
        }
        let data = self.to_f64_vec();
        let averages = data
            .windows(window)
            .map(|w| w.iter().sum::<f64>() / window as f64)
            .collect();
        Ok(Self::from_vec_f64(averages))
    }

    /// Differences between consecutive elements, `a[i + 1] - a[i]`.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![1, 4, 9, 16]);
    /// assert_eq!(a.diff().unwrap().as_i64_slice(), Some(&[3, 5, 7][..]));
    /// ```
    pub fn diff(&self) -> Result<Self, Error> {
        if self.len() < 2 {
            return Err(Error::Domain("Need at least 2 elements for differences."));
        }
        dispatch!(self.buffer(), |data| {
            let diffs = data
                .windows(2)
                .map(|w| w[1].try_sub(w[0]))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self::from_elements(diffs))
        })
    }

    /// Running totals (prefix sums). The last element equals [VectoPyArray::sum].
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(a.cumulative_sum().unwrap().as_i64_slice(), Some(&[1, 3, 6, 10, 15][..]));
    /// ```
    pub fn cumulative_sum(&self) -> Result<Self, Error> {
        dispatch!(self.buffer(), |data| {
            prefix_sums(data).map(Self::from_elements)
        })
    }

    /// Moves elements by `periods` positions, filling vacated slots with zero.
    /// Positive periods shift right, negative shift left.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(a.shift(2).as_i64_slice(), Some(&[0, 0, 1, 2, 3][..]));
    /// assert_eq!(a.shift(-2).as_i64_slice(), Some(&[3, 4, 5, 0, 0][..]));
    /// ```
    pub fn shift(&self, periods: isize) -> Self {
        dispatch!(self.buffer(), |data| Self::from_elements(shift_forward(data, periods)))
    }
}

fn prefix_sums<E: Element>(data: &[E]) -> Result<Vec<E>, Error> {
    let mut totals = Vec::with_capacity(data.len());
    let mut running = E::zero();
    for &x in data {
        running = running.try_add(x)?;
        totals.push(running);
    }
    Ok(totals)
}

fn shift_forward<E: Element>(data: &[E], periods: isize) -> Vec<E> {
    let n = data.len();
    let k = periods.unsigned_abs();
    let mut shifted = vec![E::zero(); n];
    if k < n {
        if periods >= 0 {
            shifted[k..].copy_from_slice(&data[..n - k]);
        } else {
            shifted[..n - k].copy_from_slice(&data[k..]);
        }
    }
    shifted
}
