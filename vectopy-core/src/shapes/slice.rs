use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::array::Error;

/// A `start:stop:step` selection with the same semantics as sequence
/// slicing in Python: negative bounds count from the end, out of range
/// bounds are clamped, and a negative step walks backwards.
///
/// ```rust
/// # use vectopy_core::shapes::Slice;
/// assert_eq!(Slice::from(1..4).indices(5).unwrap(), vec![1, 2, 3]);
/// assert_eq!(Slice::from(-2..).indices(5).unwrap(), vec![3, 4]);
/// assert_eq!(Slice::from(..).with_step(-2).indices(5).unwrap(), vec![4, 2, 0]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    pub const fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves the slice against a sequence of length `len`, returning the
    /// selected positions in order.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>, Error> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::InvalidSlice);
        }
        // keeps `-step` representable, every step this large selects at most one element
        let step = step.max(-isize::MAX);
        let len = len as isize;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);

        let count = if step < 0 {
            if stop < start {
                (start - stop - 1) / -step + 1
            } else {
                0
            }
        } else if start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        Ok((0..count).map(|i| (start + i * step) as usize).collect())
    }
}

impl From<Range<isize>> for Slice {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), None)
    }
}

impl From<RangeInclusive<isize>> for Slice {
    fn from(r: RangeInclusive<isize>) -> Self {
        let (start, end) = r.into_inner();
        // `..=-1` runs to the end of the sequence
        let stop = if end == -1 { None } else { end.checked_add(1) };
        Self::new(Some(start), stop, None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}
