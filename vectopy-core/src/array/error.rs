use crate::dtypes::Dtype;

/// Represents the different errors that can occur from creating arrays
/// or running array operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An array was requested with a shape that is not one dimensional.
    Rank(usize),
    /// The operands of a binary operation have different shapes.
    Shape { lhs: (usize,), rhs: (usize,) },
    /// Not enough (or too many) elements were provided when creating an array.
    WrongNumElements { expected: usize, found: usize },
    /// The right hand side of a binary operation is neither a number nor an array.
    TypeMismatch { operand: &'static str },
    /// An array was requested from an empty sequence.
    EmptySequence,
    /// `arange` produced no values.
    EmptyRange,
    /// The operation needs at least one element.
    Empty { op: &'static str },
    /// A precondition of the operation does not hold.
    Domain(&'static str),
    /// No value occurs in more than half of the elements.
    NoMajority,
    IndexOutOfBounds { index: isize, len: usize },
    /// A slice step of zero.
    InvalidSlice,
    /// Integer arithmetic left the range of `i64`.
    Overflow { op: &'static str },
    DivisionByZero,
    /// A value has no representation in the target dtype.
    Cast { value: f64, dtype: Dtype },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Rank(rank) => write!(
                f,
                "VectoPyArray only supports 1-dimensional arrays, got a shape of rank {rank}."
            ),
            Error::Shape { lhs, rhs } => write!(
                f,
                "Operands must have the same shape. Got ({},) and ({},).",
                lhs.0, rhs.0
            ),
            Error::WrongNumElements { expected, found } => write!(
                f,
                "Expected {expected} elements to fill shape ({expected},), found {found}."
            ),
            Error::TypeMismatch { operand } => write!(
                f,
                "Unsupported operand type(s): 'VectoPyArray' and '{operand}'"
            ),
            Error::EmptySequence => f.write_str("Cannot create an array from an empty sequence."),
            Error::EmptyRange => f.write_str("arange: empty range for given start, stop, and step"),
            Error::Empty { op } => write!(f, "Cannot compute {op} of empty array."),
            Error::Domain(msg) => f.write_str(msg),
            Error::NoMajority => f.write_str("No majority element found."),
            Error::IndexOutOfBounds { index, len } => write!(
                f,
                "Index {index} is out of bounds for array of size {len}."
            ),
            Error::InvalidSlice => f.write_str("Slice step cannot be zero."),
            Error::Overflow { op } => write!(f, "Integer overflow in {op}."),
            Error::DivisionByZero => f.write_str("Division by zero."),
            Error::Cast { value, dtype } => write!(f, "Cannot represent {value} as {dtype}."),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_their_keywords() {
        let shape = Error::Shape { lhs: (3,), rhs: (2,) }.to_string();
        assert!(shape.contains("same shape"));
        assert!(shape.contains("(3,) and (2,)"));

        let operand = Error::TypeMismatch { operand: "str" }.to_string();
        assert!(operand.contains("Unsupported operand type"));
        assert!(operand.contains("'str'"));

        assert!(Error::Empty { op: "mean" }.to_string().contains("empty array"));
        assert!(Error::EmptySequence.to_string().contains("empty sequence"));
        assert!(Error::NoMajority.to_string().contains("No majority element"));
    }
}
