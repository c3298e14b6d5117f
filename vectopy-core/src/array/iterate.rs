use super::VectoPyArray;
use crate::dtypes::Scalar;

/// Iterates the elements of an array as [Scalar]s.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    array: &'a VectoPyArray,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Scalar;
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let x = self.array.buffer.scalar_at(self.front);
        self.front += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.array.buffer.scalar_at(self.back))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl VectoPyArray {
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl<'a> IntoIterator for &'a VectoPyArray {
    type Item = Scalar;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
