//! The instruction emission trait consumed by the scalar operator layer

use thiserror::Error;

/// Opaque handle to an emitted value.
///
/// Handles are minted by an [`Emitter`] and are only meaningful to the
/// emitter that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueId(u32);

impl ValueId {
    /// Build a handle from a backend-assigned index.
    pub fn from_raw(index: u32) -> Self {
        ValueId(index)
    }

    /// The backend-assigned index behind this handle.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Physical representation of a value during code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    /// Single bit, the result kind of comparisons and null flags
    Bool,
    I8,
    I16,
    I32,
    I64,
    F64,
    /// Pointer to out-of-line data (variable-length types)
    Ptr,
}

impl NativeKind {
    /// Width in bits of this representation.
    pub fn bits(self) -> u32 {
        match self {
            NativeKind::Bool => 1,
            NativeKind::I8 => 8,
            NativeKind::I16 => 16,
            NativeKind::I32 => 32,
            NativeKind::I64 | NativeKind::F64 | NativeKind::Ptr => 64,
        }
    }

    /// Whether this is a fixed-width integer kind.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            NativeKind::I8 | NativeKind::I16 | NativeKind::I32 | NativeKind::I64
        )
    }
}

/// Comparison predicate. Integer comparisons are signed; float comparisons
/// are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

/// Run-time fault conditions an operator can arm in emitted code.
///
/// A native backend lowers `fault_if` to a conditional trap that fires when
/// the compiled query executes; the interpreting backend surfaces the fault
/// immediately as an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("division by zero")]
    DivideByZero,
}

/// Primitive instruction emission.
///
/// Every method appends an instruction to the current position and returns a
/// handle to its result. Control flow is structured: `begin_if`/`begin_else`/
/// `end_if` bracket a two-armed region and `phi` merges one value per arm of
/// the most recently closed region. Callers must keep the bracketing
/// balanced; emitters are free to panic on malformed nesting since that is a
/// caller bug, not an input condition.
///
/// Both arms of a region may be evaluated by a backend (the interpreting one
/// always is), so instructions emitted inside an arm must tolerate garbage
/// operands: the division primitives produce an unspecified value on a zero
/// divisor rather than faulting, and `fault_if` only fires on the taken
/// path.
pub trait Emitter {
    // Constants
    fn const_bool(&mut self, v: bool) -> ValueId;
    fn const_int(&mut self, kind: NativeKind, v: i64) -> ValueId;
    fn const_float(&mut self, v: f64) -> ValueId;

    // Integer arithmetic. The `_overflow` forms return `(result, overflow)`
    // where the second handle is a Bool that is true iff the operation
    // wrapped. `sub` is the plain wrapping form used for sort deltas.
    fn add_overflow(&mut self, lhs: ValueId, rhs: ValueId) -> (ValueId, ValueId);
    fn sub_overflow(&mut self, lhs: ValueId, rhs: ValueId) -> (ValueId, ValueId);
    fn mul_overflow(&mut self, lhs: ValueId, rhs: ValueId) -> (ValueId, ValueId);
    fn sub(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn sdiv(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn srem(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;

    // Float arithmetic
    fn fadd(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn fsub(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn fmul(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn fdiv(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn frem(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn sqrt(&mut self, v: ValueId) -> ValueId;
    fn fceil(&mut self, v: ValueId) -> ValueId;
    fn ffloor(&mut self, v: ValueId) -> ValueId;

    // Comparisons
    fn icmp(&mut self, pred: Predicate, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn fcmp(&mut self, pred: Predicate, lhs: ValueId, rhs: ValueId) -> ValueId;

    // Casts
    fn trunc(&mut self, v: ValueId, to: NativeKind) -> ValueId;
    fn sext(&mut self, v: ValueId, to: NativeKind) -> ValueId;
    fn zext(&mut self, v: ValueId, to: NativeKind) -> ValueId;
    fn int_to_float(&mut self, v: ValueId) -> ValueId;
    fn float_to_int(&mut self, v: ValueId, to: NativeKind) -> ValueId;

    // Bitwise / logical on Bool values
    fn and(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn or(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId;
    fn not(&mut self, v: ValueId) -> ValueId;

    /// Branch-free conditional: `cond ? then_v : else_v`.
    fn select(&mut self, cond: ValueId, then_v: ValueId, else_v: ValueId) -> ValueId;

    // Structured control flow
    fn begin_if(&mut self, cond: ValueId);
    fn begin_else(&mut self);
    fn end_if(&mut self);

    /// Merge one value per arm of the most recently closed if-region.
    /// May be called more than once after `end_if` to merge several values
    /// (typically data and null flag).
    fn phi(&mut self, then_v: ValueId, else_v: ValueId) -> ValueId;

    /// Arm a run-time fault on `cond`. A native backend emits a conditional
    /// trap and returns `Ok`; an evaluating backend returns `Err(fault)`
    /// when `cond` is true on the taken path.
    fn fault_if(&mut self, cond: ValueId, fault: Fault) -> Result<(), Fault>;

    /// Representation of the value behind a handle.
    fn kind_of(&self, v: ValueId) -> NativeKind;
}
