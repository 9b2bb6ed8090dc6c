//! Scalar operator implementations
//!
//! Each type family lives in its own module and registers unit-struct
//! operators into its type's tables. The null-dispatch wrappers in
//! [`null_check`] factor the "any null operand produces a null result"
//! short-circuit out of every concrete implementation.

pub mod boolean;
pub mod decimal;
pub mod integer;
pub mod null_check;
pub mod traits;
pub mod varchar;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a unary, binary, or n-ary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorId {
    Negate,
    Abs,
    Ceil,
    Floor,
    Sqrt,
    LogicalNot,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatorId::Negate => "negation",
            OperatorId::Abs => "abs",
            OperatorId::Ceil => "ceil",
            OperatorId::Floor => "floor",
            OperatorId::Sqrt => "sqrt",
            OperatorId::LogicalNot => "logical not",
            OperatorId::Add => "addition",
            OperatorId::Sub => "subtraction",
            OperatorId::Mul => "multiplication",
            OperatorId::Div => "division",
            OperatorId::Mod => "modulo",
        };
        write!(f, "{name}")
    }
}

/// One of the comparison operations a type's comparison handler provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonKind {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
    /// Raw signed difference for sort tie-breaking, not a normalized sign.
    ForSort,
}

/// How a concrete operator reacts to overflow or a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Arm a run-time fault in the emitted code.
    #[default]
    RaiseError,
    /// Produce a null value instead of faulting. Division and modulo honor
    /// this; see the reference family for the exact scope.
    ReturnNull,
}

/// Per-call configuration, constructed at each call site by the compiling
/// caller and never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvocationContext {
    pub on_error: ErrorPolicy,
}

impl InvocationContext {
    pub fn new(on_error: ErrorPolicy) -> Self {
        InvocationContext { on_error }
    }
}
