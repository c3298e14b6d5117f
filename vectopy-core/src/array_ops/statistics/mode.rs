use indexmap::IndexMap;

use crate::{
    array::{dispatch, Error, VectoPyArray},
    dtypes::{Element, Scalar},
};

/// The most frequent value(s) of an array.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// One value has the highest frequency.
    Single(Scalar),
    /// Several values tie for the highest frequency, in order of first
    /// occurrence in the array.
    Multiple(Vec<Scalar>),
}

impl Mode {
    /// All modal values, a single mode gives a one element vector.
    pub fn values(&self) -> Vec<Scalar> {
        match self {
            Mode::Single(x) => vec![*x],
            Mode::Multiple(xs) => xs.clone(),
        }
    }
}

/// Counts how often each value occurs, keyed by [Element::key]. Entries
/// iterate in order of first occurrence.
pub(crate) fn frequencies<E: Element>(data: &[E]) -> IndexMap<u64, (E, usize)> {
    let mut counts = IndexMap::new();
    for &x in data {
        counts.entry(x.key()).or_insert((x, 0)).1 += 1;
    }
    counts
}

impl VectoPyArray {
    /// The most frequent element. When several elements tie, all of them
    /// are returned in order of first occurrence.
    ///
    /// ```rust
    /// # use vectopy_core::prelude::*;
    /// let a = VectoPyArray::from_vec_i64(vec![1, 2, 2, 3]);
    /// assert_eq!(a.mode().unwrap(), Mode::Single(Scalar::Int(2)));
    ///
    /// let b = VectoPyArray::from_vec_i64(vec![3, 1, 3, 1, 2]);
    /// assert_eq!(b.mode().unwrap(), Mode::Multiple(vec![Scalar::Int(3), Scalar::Int(1)]));
    /// ```
    pub fn mode(&self) -> Result<Mode, Error> {
        self.non_empty("mode")?;
        let mut modes = dispatch!(self.buffer(), |data| {
            let counts = frequencies(data);
            let highest = counts.values().map(|&(_, c)| c).max().unwrap_or(0);
            counts
                .into_values()
                .filter(|&(_, c)| c == highest)
                .map(|(x, _)| x.into_scalar())
                .collect::<Vec<_>>()
        });
        Ok(if modes.len() == 1 {
            Mode::Single(modes.remove(0))
        } else {
            Mode::Multiple(modes)
        })
    }
}
