//! Module for data type related types and traits. Contains [Dtype], [Scalar], and [Element].
//!
//! A [Dtype] is the tag an array carries to say what kind of numbers it holds.
//! Only two exist:
//! - [Dtype::Integer] - backed by `i64`, a simulated item size of 4 bytes.
//! - [Dtype::Float] - backed by `f64`, a simulated item size of 8 bytes.
//!
//! All promotion rules are pure functions over these tags, see [Dtype::promote].

mod element;
mod scalar;

pub use element::Element;
pub use scalar::Scalar;

/// The declared element kind of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    Integer,
    Float,
}

impl Dtype {
    /// The dtype of the result of a binary operation between `self` and `other`.
    /// Float dominates: if either side is [Dtype::Float] the result is too.
    ///
    /// ```rust
    /// # use vectopy_core::dtypes::Dtype;
    /// assert_eq!(Dtype::Integer.promote(Dtype::Integer), Dtype::Integer);
    /// assert_eq!(Dtype::Integer.promote(Dtype::Float), Dtype::Float);
    /// assert_eq!(Dtype::Float.promote(Dtype::Integer), Dtype::Float);
    /// ```
    pub const fn promote(self, other: Dtype) -> Dtype {
        match (self, other) {
            (Dtype::Integer, Dtype::Integer) => Dtype::Integer,
            _ => Dtype::Float,
        }
    }

    /// Simulated number of bytes per element.
    pub const fn itemsize(self) -> usize {
        match self {
            Dtype::Integer => 4,
            Dtype::Float => 8,
        }
    }

    /// The zero value of this dtype.
    pub const fn zero(self) -> Scalar {
        match self {
            Dtype::Integer => Scalar::Int(0),
            Dtype::Float => Scalar::Float(0.0),
        }
    }

    /// The one value of this dtype.
    pub const fn one(self) -> Scalar {
        match self {
            Dtype::Integer => Scalar::Int(1),
            Dtype::Float => Scalar::Float(1.0),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Dtype::Integer => "int",
            Dtype::Float => "float",
        }
    }
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
