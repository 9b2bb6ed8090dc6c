//! Error types for the scalar operator layer

use crate::operators::OperatorId;
use crate::types::TypeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while compiling a scalar expression.
///
/// Only [`Error::ArithmeticOverflow`] and [`Error::DivideByZero`] are
/// policy-configurable through the invocation context; every other variant
/// indicates a caller bug or an unsupported query and is fatal to the
/// current expression's compilation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("cannot cast {from} to {to}")]
    UnsupportedCast { from: TypeId, to: TypeId },

    #[error("arithmetic overflow in {operator} over {ty}")]
    ArithmeticOverflow { operator: OperatorId, ty: TypeId },

    #[error("division by zero in {operator} over {ty}")]
    DivideByZero { operator: OperatorId, ty: TypeId },

    #[error("unknown type: {0}")]
    UnknownType(TypeId),

    #[error("type mismatch in {operator}: {operands}")]
    TypeMismatch { operator: String, operands: String },

    #[error("internal error: {0}")]
    Internal(String),
}
