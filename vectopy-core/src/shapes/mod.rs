//! Shape related types like [Shape] and [Slice].
//!
//! Every array is one dimensional, so a shape is the 1-tuple `(n,)`:
//! ```rust
//! # use vectopy_core::shapes::*;
//! let s: Shape = (5,);
//! assert_eq!(check_rank(&[5]).unwrap(), s);
//! assert!(check_rank(&[2, 3]).is_err());
//! ```

mod slice;

pub use slice::Slice;

use crate::array::Error;

/// The shape of an array, `(n,)`.
pub type Shape = (usize,);

/// Validates that `dims` describes a one dimensional shape.
pub fn check_rank(dims: &[usize]) -> Result<Shape, Error> {
    match dims {
        [n] => Ok((*n,)),
        _ => Err(Error::Rank(dims.len())),
    }
}

/// Fails with [Error::Shape] unless both shapes are equal.
pub fn check_same_shape(lhs: Shape, rhs: Shape) -> Result<(), Error> {
    if lhs != rhs {
        return Err(Error::Shape { lhs, rhs });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_rank() {
        assert_eq!(check_rank(&[0]), Ok((0,)));
        assert_eq!(check_rank(&[]), Err(Error::Rank(0)));
        assert_eq!(check_rank(&[1, 2, 3]), Err(Error::Rank(3)));
    }

    #[test]
    fn test_check_same_shape() {
        assert!(check_same_shape((3,), (3,)).is_ok());
        assert_eq!(
            check_same_shape((3,), (2,)),
            Err(Error::Shape { lhs: (3,), rhs: (2,) })
        );
    }
}
