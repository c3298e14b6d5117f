pub(crate) mod ops;

pub use ops::{BinaryKernelOp, Operand, TryIntoOperand};
